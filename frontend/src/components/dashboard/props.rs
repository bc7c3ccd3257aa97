use yew::prelude::*;

/// Properties shared by every dashboard card.
#[derive(Properties, PartialEq, Clone)]
pub struct DashboardProps {
    /// Time horizon in days for "upcoming" queries. Views without a
    /// horizon (outstanding documents) ignore it.
    #[prop_or(30)]
    pub days: u32,
}
