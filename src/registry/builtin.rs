//! Builtin card catalog for the ChurchAfrica dashboard.
//!
//! Catalog order matters: the starter layout shows the first six entries,
//! and the recommended preset fills slots in catalog order.

use crate::{CardCategory, Trend};

use super::KpiCard;

/// Card ids of the starter layout (the first six catalog entries).
///
/// Kept as a constant so `DashboardConfig::default()` does not need to
/// build a registry; `registry::tests` asserts it stays in sync with the
/// catalog below.
pub const STARTER_CARD_IDS: [&str; 6] = [
    "total-members",
    "weekly-attendance",
    "monthly-giving",
    "attendance-rate",
    "small-group-engagement",
    "upcoming-events",
];

/// Returns the full builtin catalog.
pub(super) fn catalog() -> Vec<KpiCard> {
    vec![
        KpiCard {
            id: "total-members",
            title: "Total Members",
            category: CardCategory::Membership,
            recommended: true,
            value: "1,245",
            delta: "+3.2%",
            trend: Trend::Up,
        },
        KpiCard {
            id: "weekly-attendance",
            title: "Weekly Attendance",
            category: CardCategory::Attendance,
            recommended: true,
            value: "862",
            delta: "+1.8%",
            trend: Trend::Up,
        },
        KpiCard {
            id: "monthly-giving",
            title: "Monthly Giving",
            category: CardCategory::Giving,
            recommended: true,
            value: "KSh 1.2M",
            delta: "+4.5%",
            trend: Trend::Up,
        },
        KpiCard {
            id: "attendance-rate",
            title: "Attendance Rate",
            category: CardCategory::Attendance,
            recommended: true,
            value: "69%",
            delta: "-0.6%",
            trend: Trend::Down,
        },
        KpiCard {
            id: "small-group-engagement",
            title: "Small Group Engagement",
            category: CardCategory::Engagement,
            recommended: true,
            value: "57%",
            delta: "+2.1%",
            trend: Trend::Up,
        },
        KpiCard {
            id: "upcoming-events",
            title: "Upcoming Events",
            category: CardCategory::Events,
            recommended: true,
            value: "8",
            delta: "+2",
            trend: Trend::Up,
        },
        KpiCard {
            id: "new-members",
            title: "New Members",
            category: CardCategory::Membership,
            recommended: false,
            value: "34",
            delta: "+12",
            trend: Trend::Up,
        },
        KpiCard {
            id: "first-time-guests",
            title: "First-Time Guests",
            category: CardCategory::Membership,
            recommended: false,
            value: "21",
            delta: "-3",
            trend: Trend::Down,
        },
        KpiCard {
            id: "pledges-fulfilled",
            title: "Pledges Fulfilled",
            category: CardCategory::Giving,
            recommended: false,
            value: "82%",
            delta: "+1.4%",
            trend: Trend::Up,
        },
        KpiCard {
            id: "volunteer-hours",
            title: "Volunteer Hours",
            category: CardCategory::Engagement,
            recommended: false,
            value: "412",
            delta: "+36",
            trend: Trend::Up,
        },
        KpiCard {
            id: "service-checkins",
            title: "Service Check-Ins",
            category: CardCategory::Attendance,
            recommended: false,
            value: "790",
            delta: "+22",
            trend: Trend::Up,
        },
        KpiCard {
            id: "event-registrations",
            title: "Event Registrations",
            category: CardCategory::Events,
            recommended: false,
            value: "156",
            delta: "-8",
            trend: Trend::Down,
        },
    ]
}
