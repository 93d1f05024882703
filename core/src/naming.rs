//! Deterministic label generation from curated word lists.
//!
//! Rank items, kanban assignees, and operation-log operators all pull
//! their labels from fixed ordered lists indexed by the keyed stream,
//! so the same sub-key always yields the same label.
//!
//! RULE: lists are append-only. Inserting or reordering entries
//! reshuffles every label generated after the change.

use crate::rng::KeyedRng;

pub struct Lexicon;

impl Lexicon {
    /// Campaign/plan display name, e.g. "Spring Search Push".
    pub fn plan_name(rng: &mut KeyedRng) -> String {
        let theme = rng.pick(Self::plan_themes());
        let channel = rng.pick(Self::plan_channels());
        let tactic = rng.pick(Self::plan_tactics());
        format!("{theme} {channel} {tactic}")
    }

    /// Audience segment display name, e.g. "Lapsed High-Spend Shoppers".
    pub fn audience_name(rng: &mut KeyedRng) -> String {
        let recency = rng.pick(Self::audience_recency());
        let trait_ = rng.pick(Self::audience_traits());
        format!("{recency} {trait_}")
    }

    /// Search keyword, e.g. "wireless earbuds deal".
    pub fn keyword(rng: &mut KeyedRng) -> String {
        let product = rng.pick(Self::keyword_products());
        let modifier = rng.pick(Self::keyword_modifiers());
        format!("{product} {modifier}")
    }

    /// Task assignee / log operator from the curated staff list.
    pub fn person(rng: &mut KeyedRng) -> &'static str {
        *rng.pick(Self::people())
    }

    fn plan_themes() -> &'static [&'static str] {
        &[
            "Spring", "Summer", "Autumn", "Holiday", "Flagship", "Clearance",
            "New-Arrival", "Weekend", "Prime-Day", "Evergreen", "Back-to-School",
            "Anniversary",
        ]
    }

    fn plan_channels() -> &'static [&'static str] {
        &[
            "Search", "Feed", "Display", "Live", "Social", "Retargeting",
            "Brand", "Affiliate",
        ]
    }

    fn plan_tactics() -> &'static [&'static str] {
        &["Push", "Boost", "Blitz", "Sprint", "Test", "Scale-Up", "Defense"]
    }

    fn audience_recency() -> &'static [&'static str] {
        &["New", "Active", "Lapsed", "Loyal", "Window-Shopping", "Returning"]
    }

    fn audience_traits() -> &'static [&'static str] {
        &[
            "High-Spend Shoppers", "Deal Seekers", "Cart Abandoners",
            "Category Browsers", "Brand Followers", "Gift Buyers",
            "Subscription Members", "Mobile-First Users",
        ]
    }

    fn keyword_products() -> &'static [&'static str] {
        &[
            "wireless earbuds", "running shoes", "air fryer", "laptop stand",
            "yoga mat", "phone case", "desk lamp", "water bottle",
            "backpack", "skincare set", "coffee grinder", "smart watch",
        ]
    }

    fn keyword_modifiers() -> &'static [&'static str] {
        &["deal", "sale", "best", "cheap", "review", "2024", "free shipping"]
    }

    fn people() -> &'static [&'static str] {
        &[
            "Ava Chen", "Marcus Webb", "Priya Nair", "Diego Santos",
            "Hannah Lee", "Tomasz Kowal", "Yuki Tanaka", "Grace Okafor",
            "Liam O'Brien", "Sofia Marino", "Noah Kim", "Elena Petrov",
            "Omar Haddad", "Ines Dubois", "Jonas Berg", "Mei Lin",
        ]
    }
}
