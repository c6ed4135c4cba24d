#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuickStats {
    pub patients: &'static str,
    pub success_rate: u8,
    pub next_slot: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Doctor {
    pub id: u32,
    pub name: &'static str,
    pub specialization: &'static str,
    pub experience: &'static str,
    pub fee: &'static str,
    pub city: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub available: bool,
    pub image: &'static str,
    pub badges: &'static [&'static str],
    pub quick_stats: Option<QuickStats>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Specialty {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Transition variant key, e.g. `"fadeUp"`.
    pub animation: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatSpec {
    pub label: &'static str,
    pub target: u32,
    pub step: u32,
    pub suffix: &'static str,
}
