//! Typed segments of a resource ID.

/// The kind of value held at one position of a resource ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// A fixed keyword, e.g. `subscriptions` or `resourceGroups`.
    Static(&'static str),
    /// A resource provider namespace, e.g. `Microsoft.Network`.
    ResourceProvider(&'static str),
    /// The UUID of an Azure subscription.
    SubscriptionId,
    /// The name of a resource group.
    ResourceGroup,
    /// A name chosen by the user.
    UserSpecified,
    /// One of a closed set of values.
    Constant(&'static [&'static str]),
    /// An arbitrary parent resource path. Only meaningful as the first segment.
    Scope,
}

/// One named position within a resource ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Stable name used in errors and parse results, e.g. `subnetName`.
    pub name: &'static str,
    pub kind: SegmentKind,
    /// Example value used when rendering the expected format.
    pub example: &'static str,
}

pub const EXAMPLE_SUBSCRIPTION_ID: &str = "12345678-1234-9876-4563-123456789012";
pub const EXAMPLE_RESOURCE_GROUP: &str = "example-resource-group";
pub const EXAMPLE_SCOPE: &str =
    "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/some-resource-group";

impl Segment {
    pub const fn fixed(name: &'static str, value: &'static str) -> Self {
        Self {
            name,
            kind: SegmentKind::Static(value),
            example: value,
        }
    }

    pub const fn provider(name: &'static str, namespace: &'static str) -> Self {
        Self {
            name,
            kind: SegmentKind::ResourceProvider(namespace),
            example: namespace,
        }
    }

    pub const fn subscription_id(name: &'static str) -> Self {
        Self {
            name,
            kind: SegmentKind::SubscriptionId,
            example: EXAMPLE_SUBSCRIPTION_ID,
        }
    }

    pub const fn resource_group(name: &'static str) -> Self {
        Self {
            name,
            kind: SegmentKind::ResourceGroup,
            example: EXAMPLE_RESOURCE_GROUP,
        }
    }

    pub const fn user_specified(name: &'static str, example: &'static str) -> Self {
        Self {
            name,
            kind: SegmentKind::UserSpecified,
            example,
        }
    }

    /// A segment restricted to `values`. An empty set matches nothing.
    pub const fn constant(name: &'static str, values: &'static [&'static str]) -> Self {
        let example = match values {
            [first, ..] => *first,
            [] => name,
        };
        Self {
            name,
            kind: SegmentKind::Constant(values),
            example,
        }
    }

    pub const fn scope(name: &'static str) -> Self {
        Self {
            name,
            kind: SegmentKind::Scope,
            example: EXAMPLE_SCOPE,
        }
    }

    /// The literal value of a static or provider segment.
    pub fn fixed_value(&self) -> Option<&'static str> {
        match self.kind {
            SegmentKind::Static(value) | SegmentKind::ResourceProvider(value) => Some(value),
            _ => None,
        }
    }

    /// What a value in this position must look like.
    pub fn requirement(&self) -> String {
        match self.kind {
            SegmentKind::Static(value) => format!("should be the literal value {:?}", value),
            SegmentKind::ResourceProvider(value) => {
                format!("should be the resource provider {:?}", value)
            }
            SegmentKind::SubscriptionId => "should be the UUID of the Azure Subscription".into(),
            SegmentKind::ResourceGroup => "should be the name of the Resource Group".into(),
            SegmentKind::UserSpecified => {
                "should be the user specified value for this resource".into()
            }
            SegmentKind::Constant([]) => "has no allowed values".into(),
            SegmentKind::Constant(values) => {
                format!("should be one of: {}", values.join(", "))
            }
            SegmentKind::Scope => "should be the ARM ID of the parent scope".into(),
        }
    }
}

/// Render the example ID for a list of segments.
pub fn render_example(segments: &[Segment]) -> String {
    let parts: Vec<&str> = segments
        .iter()
        .map(|s| s.example.trim_matches('/'))
        .collect();
    format!("/{}", parts.join("/"))
}
