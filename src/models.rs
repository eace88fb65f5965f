use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::deadline::Offset;
use crate::error::{PlanError, Result};

/// Marketplace category a task should be fulfilled from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorCategory {
    Venue,
    Catering,
    Photography,
    Entertainment,
    Florist,
    Bakery,
    Stationery,
    Decor,
    Rentals,
    Attire,
    Beauty,
    Transportation,
    AudioVisual,
    Officiant,
    Speaker,
    Merchandise,
}

impl VendorCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            VendorCategory::Venue => "Venue",
            VendorCategory::Catering => "Catering",
            VendorCategory::Photography => "Photography",
            VendorCategory::Entertainment => "Entertainment",
            VendorCategory::Florist => "Florist",
            VendorCategory::Bakery => "Bakery",
            VendorCategory::Stationery => "Stationery",
            VendorCategory::Decor => "Decor",
            VendorCategory::Rentals => "Rentals",
            VendorCategory::Attire => "Attire",
            VendorCategory::Beauty => "Beauty",
            VendorCategory::Transportation => "Transportation",
            VendorCategory::AudioVisual => "Audio/Visual",
            VendorCategory::Officiant => "Officiant",
            VendorCategory::Speaker => "Speaker",
            VendorCategory::Merchandise => "Merchandise",
        }
    }
}

/// An optional service a client can ask for while describing their event.
///
/// Each variant owns exactly one free-text label, the one shown to the
/// client and used as the key of the incoming answers map.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ServiceOption {
    PhotographyVideography,
    LiveBandOrDj,
    FloralArrangements,
    WeddingCake,
    Officiant,
    HairAndMakeup,
    Transportation,
    WeddingAttire,
    AudioVisualEquipment,
    KeynoteSpeaker,
    CateringServices,
    BrandedMerchandise,
    EventRegistration,
    TeamBuildingActivities,
    ThemedDecorations,
    BirthdayCake,
    PartyEntertainer,
    PartyFavors,
    PhotoBooth,
    CustomAnnouncements,
}

impl ServiceOption {
    pub const ALL: [ServiceOption; 20] = [
        ServiceOption::PhotographyVideography,
        ServiceOption::LiveBandOrDj,
        ServiceOption::FloralArrangements,
        ServiceOption::WeddingCake,
        ServiceOption::Officiant,
        ServiceOption::HairAndMakeup,
        ServiceOption::Transportation,
        ServiceOption::WeddingAttire,
        ServiceOption::AudioVisualEquipment,
        ServiceOption::KeynoteSpeaker,
        ServiceOption::CateringServices,
        ServiceOption::BrandedMerchandise,
        ServiceOption::EventRegistration,
        ServiceOption::TeamBuildingActivities,
        ServiceOption::ThemedDecorations,
        ServiceOption::BirthdayCake,
        ServiceOption::PartyEntertainer,
        ServiceOption::PartyFavors,
        ServiceOption::PhotoBooth,
        ServiceOption::CustomAnnouncements,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ServiceOption::PhotographyVideography => "Photography/Videography Services",
            ServiceOption::LiveBandOrDj => "Live Band or DJ",
            ServiceOption::FloralArrangements => "Floral Arrangements",
            ServiceOption::WeddingCake => "Wedding Cake",
            ServiceOption::Officiant => "Officiant",
            ServiceOption::HairAndMakeup => "Hair and Makeup",
            ServiceOption::Transportation => "Transportation",
            ServiceOption::WeddingAttire => "Wedding Attire",
            ServiceOption::AudioVisualEquipment => "Audio/Visual Equipment",
            ServiceOption::KeynoteSpeaker => "Keynote Speaker",
            ServiceOption::CateringServices => "Catering Services",
            ServiceOption::BrandedMerchandise => "Branded Merchandise",
            ServiceOption::EventRegistration => "Event Registration",
            ServiceOption::TeamBuildingActivities => "Team Building Activities",
            ServiceOption::ThemedDecorations => "Themed Decorations",
            ServiceOption::BirthdayCake => "Birthday Cake",
            ServiceOption::PartyEntertainer => "Entertainment (Magician, Clown, etc.)",
            ServiceOption::PartyFavors => "Party Favors",
            ServiceOption::PhotoBooth => "Photo Booth",
            ServiceOption::CustomAnnouncements => "Custom Announcements",
        }
    }

    /// Exact, case-sensitive label lookup.
    pub fn from_label(label: &str) -> Option<ServiceOption> {
        Self::ALL.iter().copied().find(|o| o.label() == label)
    }
}

/// The set of options a client selected.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    selected: BTreeSet<ServiceOption>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds answers from a free-text `label -> selected` map.
    ///
    /// Only `true` flags are kept. Unknown labels are skipped with a warning
    /// unless `strict` is set, in which case the first one is an error.
    pub fn from_flags<I, S>(flags: I, strict: bool) -> Result<Self>
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        let mut answers = Answers::new();
        for (label, selected) in flags {
            let label = label.as_ref();
            match ServiceOption::from_label(label) {
                Some(option) => {
                    if selected {
                        answers.select(option);
                    }
                }
                None if strict => return Err(PlanError::UnknownOption(label.to_string())),
                None => tracing::warn!(label, "ignoring unrecognized answer option"),
            }
        }
        Ok(answers)
    }

    /// Like [`Answers::from_flags`], visiting labels in sorted order so a
    /// strict failure always names the same label.
    pub fn from_map(flags: &HashMap<String, bool>, strict: bool) -> Result<Self> {
        let mut sorted: Vec<(&str, bool)> =
            flags.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        sorted.sort_unstable_by_key(|(label, _)| *label);
        Self::from_flags(sorted, strict)
    }

    pub fn select(&mut self, option: ServiceOption) {
        self.selected.insert(option);
    }

    pub fn with(mut self, option: ServiceOption) -> Self {
        self.select(option);
        self
    }

    pub fn contains(&self, option: ServiceOption) -> bool {
        self.selected.contains(&option)
    }

    pub fn iter(&self) -> impl Iterator<Item = ServiceOption> + '_ {
        self.selected.iter().copied()
    }
}

/// Everything the planner needs to know about one event.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EventPlanRequest {
    /// Free-text event type, e.g. "Beach Wedding".
    pub event_type: String,
    pub event_date: NaiveDate,
    pub location: String,
    pub guest_count: u32,
    /// Total budget in dollars.
    pub budget: f64,
    #[serde(default)]
    pub answers: Answers,
}

impl EventPlanRequest {
    /// Builds a request from raw form fields, parsing the `YYYY-MM-DD` date
    /// and the answer labels.
    pub fn from_form<I, S>(
        event_type: &str,
        event_date: &str,
        location: &str,
        guest_count: u32,
        budget: f64,
        answers: I,
        strict: bool,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        let date = NaiveDate::parse_from_str(event_date, "%Y-%m-%d").map_err(|source| {
            PlanError::InvalidDate { input: event_date.to_string(), source }
        })?;
        Ok(EventPlanRequest {
            event_type: event_type.to_string(),
            event_date: date,
            location: location.to_string(),
            guest_count,
            budget,
            answers: Answers::from_flags(answers, strict)?,
        })
    }
}

/// How a template prices its task.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum CostRule {
    /// Fixed dollar amount.
    Flat(f64),
    /// Share of the total budget in basis points (3000 = 30%).
    BudgetShare(u32),
    /// Dollars per guest.
    PerGuest(f64),
}

impl CostRule {
    /// Resolves the rule to dollars, rounded to cents.
    pub fn estimate(&self, budget: f64, guest_count: u32) -> f64 {
        let raw = match *self {
            CostRule::Flat(amount) => amount,
            CostRule::BudgetShare(bps) => budget * f64::from(bps) / 10_000.0,
            CostRule::PerGuest(each) => each * f64::from(guest_count),
        };
        (raw * 100.0).round() / 100.0
    }
}

/// Static rule describing how to derive one task from the event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskTemplate {
    pub description: &'static str,
    pub offset: Offset,
    pub cost: CostRule,
    pub vendor_category: Option<VendorCategory>,
}

/// A single checklist item in a generated plan.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EventTask {
    /// Unique within one generation call, re-keyed when saved.
    pub id: String,
    pub description: String,
    /// Due date, serialized as `YYYY-MM-DD`.
    pub deadline: NaiveDate,
    pub estimated_cost: f64,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub suggested_vendor_category: Option<VendorCategory>,
}

/// A generated plan, sorted by deadline.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    pub tasks: Vec<EventTask>,
}

impl Timeline {
    pub fn total_estimated_cost(&self) -> f64 {
        self.tasks.iter().map(|t| t.estimated_cost).sum()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Fraction of tasks completed, `0.0` for an empty timeline.
    pub fn progress(&self) -> f64 {
        if self.tasks.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.tasks.len() as f64
    }
}

/// A timeline persisted under a name, with the event it was generated for.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SavedTimeline {
    /// Unique name of the saved timeline.
    pub name: String,
    pub event_type: String,
    pub event_date: NaiveDate,
    pub location: String,
    pub guest_count: u32,
    pub budget: f64,
    /// Timestamp when the timeline was saved (RFC 3339).
    pub saved_at: String,
    #[serde(default)]
    pub timeline: Timeline,
}
