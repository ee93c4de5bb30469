//! Declarative definition of resource ID types.

/// Declare a resource ID type.
///
/// Each field names the segment it is read from and the label used by the
/// type's `Display` output. Fixed segments appear only in `segments`.
///
/// ```ignore
/// resource_id! {
///     /// A Key Vault.
///     pub struct KeyVaultId("Key Vault") {
///         subscription_id: "subscriptionId" => "Subscription",
///         resource_group_name: "resourceGroupName" => "Resource Group Name",
///         vault_name: "vaultName" => "Vault Name",
///     }
///     segments = [
///         Segment::fixed("staticSubscriptions", "subscriptions"),
///         Segment::subscription_id("subscriptionId"),
///         // ...
///     ];
/// }
/// ```
#[macro_export]
macro_rules! resource_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($id_type:literal) {
            $( $field:ident : $segment_name:literal => $label:literal ),* $(,)?
        }
        segments = [ $($segment:expr),* $(,)? ];
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis struct $name {
            $( pub $field: String, )*
        }

        impl $name {
            /// Build the ID from its components.
            #[allow(clippy::too_many_arguments)]
            pub fn new($($field: impl Into<String>),*) -> Self {
                Self { $($field: $field.into()),* }
            }
        }

        impl $crate::resourceids::ResourceId for $name {
            const ID_TYPE: &'static str = $id_type;

            fn segments() -> Vec<$crate::resourceids::Segment> {
                vec![$($segment),*]
            }

            fn from_parse_result(
                result: &$crate::resourceids::ParseResult,
            ) -> Result<Self, $crate::resourceids::ParseError> {
                Ok(Self {
                    $($field: result.required($segment_name)?.to_string(),)*
                })
            }

            fn segment_value(&self, name: &str) -> Option<&str> {
                match name {
                    $($segment_name => Some(self.$field.as_str()),)*
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let components: Vec<String> = vec![
                    $(format!("{}: {:?}", $label, self.$field)),*
                ];
                write!(f, "{} ({})", $id_type, components.join("\n"))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::resourceids::ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::resourceids::ResourceId>::parse(s)
            }
        }
    };
}
