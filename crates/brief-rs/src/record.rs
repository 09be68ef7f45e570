//! The brief record and its fixed field vocabulary.
//!
//! A [`BriefRecord`] is a flat set of named text fields. External callers
//! address fields by their camelCase key (`"singleMindedProp"`,
//! `"toneOfVoice"`, ...) through [`BriefRecord::update`] or the JSON input
//! format; an unknown key is ignored rather than reported.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default for [`Field::ProjectType`].
pub const DEFAULT_PROJECT_TYPE: &str = "Campaign";
/// Default for [`Field::ToneOfVoice`].
pub const DEFAULT_TONE_OF_VOICE: &str = "Confident and friendly";

/// Options offered for [`Field::ProjectType`].
pub const PROJECT_TYPES: &[&str] = &[
    "Campaign",
    "Brand",
    "Content",
    "Digital",
    "Social",
    "Production",
];

/// Options offered for [`Field::ToneOfVoice`].
pub const TONES_OF_VOICE: &[&str] = &[
    "Confident and friendly",
    "Playful and bold",
    "Premium and refined",
    "Straightforward and practical",
];

// ── Sections ──────────────────────────────────────────────────────────

/// Form section a field is grouped under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormSection {
    ProjectOverview,
    Context,
    Audience,
    Objectives,
    Proposition,
    Channels,
    Practicals,
}

impl FormSection {
    pub fn title(self) -> &'static str {
        match self {
            Self::ProjectOverview => "Project overview",
            Self::Context => "Context & background",
            Self::Audience => "Audience (WHO)",
            Self::Objectives => "Objectives (GET / TO)",
            Self::Proposition => "Proposition (BY)",
            Self::Channels => "Channels & deliverables",
            Self::Practicals => "Practicals",
        }
    }
}

// ── Field ─────────────────────────────────────────────────────────────

/// One entry of the brief vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    ProjectTitle,
    ProjectType,
    Brand,
    Requester,
    DateDue,
    Budget,
    Background,
    CurrentSituation,
    KeyChallenge,
    Audience,
    AudienceSecondary,
    AudienceInsight,
    AudienceBarriers,
    DesiredBehaviour,
    CommercialObjective,
    CommsObjective,
    SingleMindedProp,
    ReasonToBelieve,
    ToneOfVoice,
    Mandatories,
    PrimaryChannels,
    Deliverables,
    Timings,
    BrandAssets,
    Approvals,
    Measurement,
    Legal,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 27] = [
        Field::ProjectTitle,
        Field::ProjectType,
        Field::Brand,
        Field::Requester,
        Field::DateDue,
        Field::Budget,
        Field::Background,
        Field::CurrentSituation,
        Field::KeyChallenge,
        Field::Audience,
        Field::AudienceSecondary,
        Field::AudienceInsight,
        Field::AudienceBarriers,
        Field::DesiredBehaviour,
        Field::CommercialObjective,
        Field::CommsObjective,
        Field::SingleMindedProp,
        Field::ReasonToBelieve,
        Field::ToneOfVoice,
        Field::Mandatories,
        Field::PrimaryChannels,
        Field::Deliverables,
        Field::Timings,
        Field::BrandAssets,
        Field::Approvals,
        Field::Measurement,
        Field::Legal,
    ];

    /// External camelCase identifier, as used in JSON input and `--set`.
    pub fn key(self) -> &'static str {
        match self {
            Self::ProjectTitle => "projectTitle",
            Self::ProjectType => "projectType",
            Self::Brand => "brand",
            Self::Requester => "requester",
            Self::DateDue => "dateDue",
            Self::Budget => "budget",
            Self::Background => "background",
            Self::CurrentSituation => "currentSituation",
            Self::KeyChallenge => "keyChallenge",
            Self::Audience => "audience",
            Self::AudienceSecondary => "audienceSecondary",
            Self::AudienceInsight => "audienceInsight",
            Self::AudienceBarriers => "audienceBarriers",
            Self::DesiredBehaviour => "desiredBehaviour",
            Self::CommercialObjective => "commercialObjective",
            Self::CommsObjective => "commsObjective",
            Self::SingleMindedProp => "singleMindedProp",
            Self::ReasonToBelieve => "reasonToBelieve",
            Self::ToneOfVoice => "toneOfVoice",
            Self::Mandatories => "mandatories",
            Self::PrimaryChannels => "primaryChannels",
            Self::Deliverables => "deliverables",
            Self::Timings => "timings",
            Self::BrandAssets => "brandAssets",
            Self::Approvals => "approvals",
            Self::Measurement => "measurement",
            Self::Legal => "legal",
        }
    }

    /// Human-readable form label.
    pub fn label(self) -> &'static str {
        match self {
            Self::ProjectTitle => "Project title",
            Self::ProjectType => "Project type",
            Self::Brand => "Brand / client",
            Self::Requester => "Requester / account lead",
            Self::DateDue => "Date due",
            Self::Budget => "Budget (approx.)",
            Self::Background => "Background",
            Self::CurrentSituation => "Current situation",
            Self::KeyChallenge => "Key challenge",
            Self::Audience => "Primary audience",
            Self::AudienceSecondary => "Secondary audience",
            Self::AudienceInsight => "Audience insight",
            Self::AudienceBarriers => "Main barriers",
            Self::DesiredBehaviour => "Desired behaviour (GET)",
            Self::CommercialObjective => "Commercial objective",
            Self::CommsObjective => "Comms objective (TO)",
            Self::SingleMindedProp => "Single-minded proposition",
            Self::ReasonToBelieve => "Reasons to believe",
            Self::ToneOfVoice => "Tone of voice",
            Self::Mandatories => "Mandatories",
            Self::PrimaryChannels => "Primary channels",
            Self::Deliverables => "Deliverables",
            Self::Timings => "Timings & milestones",
            Self::BrandAssets => "Brand / assets",
            Self::Approvals => "Approvals",
            Self::Measurement => "Measurement (success)",
            Self::Legal => "Legal / compliance",
        }
    }

    /// Prompt shown while the field is empty or being edited.
    pub fn hint(self) -> &'static str {
        match self {
            Self::ProjectTitle => "e.g. Spring launch \u{2013} OOH & Social",
            Self::ProjectType | Self::ToneOfVoice => "Use Left/Right to pick an option",
            Self::Brand => "Brand name",
            Self::Requester => "Full name",
            Self::DateDue => "YYYY-MM-DD",
            Self::Budget => "\u{a3} \u{2014}",
            Self::Background => "Where are we now? What\u{2019}s happened so far?",
            Self::CurrentSituation => "Market, competitors, trends, internal context",
            Self::KeyChallenge => "The problem to crack in one line. Keep it human and specific.",
            Self::Audience => "Who is this really for?",
            Self::AudienceSecondary => "Anyone else who matters",
            Self::AudienceInsight => "What do they think/feel/do right now?",
            Self::AudienceBarriers => "What stops them acting? Price? Trust? Effort?",
            Self::DesiredBehaviour => "e.g. get lapsed buyers to try again",
            Self::CommercialObjective => "What business result are we after?",
            Self::CommsObjective => "What do we want people to think/feel/do?",
            Self::SingleMindedProp => "The one thought the work must land",
            Self::ReasonToBelieve => "Proof points, features, social proof, data",
            Self::Mandatories => "Logos, lockups, disclaimers, taglines, CTAs",
            Self::PrimaryChannels => "e.g. TikTok, OOH 6-sheets, CRM",
            Self::Deliverables => "e.g. 6x statics, 2x 10s edits, landing page",
            Self::Timings => "Key dates, dependencies, go-live",
            Self::BrandAssets => "Logos, fonts, imagery, guidelines",
            Self::Approvals => "Who signs off, and when",
            Self::Measurement => "How we will know it worked",
            Self::Legal => "Claims, T&Cs, regulatory checks",
        }
    }

    pub fn section(self) -> FormSection {
        match self {
            Self::ProjectTitle
            | Self::ProjectType
            | Self::Brand
            | Self::Requester
            | Self::DateDue
            | Self::Budget => FormSection::ProjectOverview,
            Self::Background | Self::CurrentSituation | Self::KeyChallenge => FormSection::Context,
            Self::Audience
            | Self::AudienceSecondary
            | Self::AudienceInsight
            | Self::AudienceBarriers => FormSection::Audience,
            Self::DesiredBehaviour | Self::CommercialObjective | Self::CommsObjective => {
                FormSection::Objectives
            }
            Self::SingleMindedProp
            | Self::ReasonToBelieve
            | Self::ToneOfVoice
            | Self::Mandatories => FormSection::Proposition,
            Self::PrimaryChannels | Self::Deliverables | Self::Timings => FormSection::Channels,
            Self::BrandAssets | Self::Approvals | Self::Measurement | Self::Legal => {
                FormSection::Practicals
            }
        }
    }

    /// Fixed option list for enumerated fields, `None` for free text.
    pub fn choices(self) -> Option<&'static [&'static str]> {
        match self {
            Self::ProjectType => Some(PROJECT_TYPES),
            Self::ToneOfVoice => Some(TONES_OF_VOICE),
            _ => None,
        }
    }

    /// Value the field takes in a fresh or reset record.
    pub fn default_value(self) -> &'static str {
        match self {
            Self::ProjectType => DEFAULT_PROJECT_TYPE,
            Self::ToneOfVoice => DEFAULT_TONE_OF_VOICE,
            _ => "",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| format!("unknown field '{s}'"))
    }
}

// ── BriefRecord ───────────────────────────────────────────────────────

/// The form contents: one string per [`Field`].
///
/// Serializes as a camelCase JSON object. Missing keys deserialize to the
/// record defaults and unknown keys are dropped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BriefRecord {
    pub project_title: String,
    pub project_type: String,
    pub brand: String,
    pub requester: String,
    pub date_due: String,
    pub budget: String,
    pub background: String,
    pub current_situation: String,
    pub key_challenge: String,
    pub audience: String,
    pub audience_secondary: String,
    pub audience_insight: String,
    pub audience_barriers: String,
    pub desired_behaviour: String,
    pub commercial_objective: String,
    pub comms_objective: String,
    pub single_minded_prop: String,
    pub reason_to_believe: String,
    pub tone_of_voice: String,
    pub mandatories: String,
    pub primary_channels: String,
    pub deliverables: String,
    pub timings: String,
    pub brand_assets: String,
    pub approvals: String,
    pub measurement: String,
    pub legal: String,
}

impl Default for BriefRecord {
    fn default() -> Self {
        Self {
            project_title: String::new(),
            project_type: DEFAULT_PROJECT_TYPE.to_string(),
            brand: String::new(),
            requester: String::new(),
            date_due: String::new(),
            budget: String::new(),
            background: String::new(),
            current_situation: String::new(),
            key_challenge: String::new(),
            audience: String::new(),
            audience_secondary: String::new(),
            audience_insight: String::new(),
            audience_barriers: String::new(),
            desired_behaviour: String::new(),
            commercial_objective: String::new(),
            comms_objective: String::new(),
            single_minded_prop: String::new(),
            reason_to_believe: String::new(),
            tone_of_voice: DEFAULT_TONE_OF_VOICE.to_string(),
            mandatories: String::new(),
            primary_channels: String::new(),
            deliverables: String::new(),
            timings: String::new(),
            brand_assets: String::new(),
            approvals: String::new(),
            measurement: String::new(),
            legal: String::new(),
        }
    }
}

impl BriefRecord {
    /// Current value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ProjectTitle => &self.project_title,
            Field::ProjectType => &self.project_type,
            Field::Brand => &self.brand,
            Field::Requester => &self.requester,
            Field::DateDue => &self.date_due,
            Field::Budget => &self.budget,
            Field::Background => &self.background,
            Field::CurrentSituation => &self.current_situation,
            Field::KeyChallenge => &self.key_challenge,
            Field::Audience => &self.audience,
            Field::AudienceSecondary => &self.audience_secondary,
            Field::AudienceInsight => &self.audience_insight,
            Field::AudienceBarriers => &self.audience_barriers,
            Field::DesiredBehaviour => &self.desired_behaviour,
            Field::CommercialObjective => &self.commercial_objective,
            Field::CommsObjective => &self.comms_objective,
            Field::SingleMindedProp => &self.single_minded_prop,
            Field::ReasonToBelieve => &self.reason_to_believe,
            Field::ToneOfVoice => &self.tone_of_voice,
            Field::Mandatories => &self.mandatories,
            Field::PrimaryChannels => &self.primary_channels,
            Field::Deliverables => &self.deliverables,
            Field::Timings => &self.timings,
            Field::BrandAssets => &self.brand_assets,
            Field::Approvals => &self.approvals,
            Field::Measurement => &self.measurement,
            Field::Legal => &self.legal,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::ProjectTitle => &mut self.project_title,
            Field::ProjectType => &mut self.project_type,
            Field::Brand => &mut self.brand,
            Field::Requester => &mut self.requester,
            Field::DateDue => &mut self.date_due,
            Field::Budget => &mut self.budget,
            Field::Background => &mut self.background,
            Field::CurrentSituation => &mut self.current_situation,
            Field::KeyChallenge => &mut self.key_challenge,
            Field::Audience => &mut self.audience,
            Field::AudienceSecondary => &mut self.audience_secondary,
            Field::AudienceInsight => &mut self.audience_insight,
            Field::AudienceBarriers => &mut self.audience_barriers,
            Field::DesiredBehaviour => &mut self.desired_behaviour,
            Field::CommercialObjective => &mut self.commercial_objective,
            Field::CommsObjective => &mut self.comms_objective,
            Field::SingleMindedProp => &mut self.single_minded_prop,
            Field::ReasonToBelieve => &mut self.reason_to_believe,
            Field::ToneOfVoice => &mut self.tone_of_voice,
            Field::Mandatories => &mut self.mandatories,
            Field::PrimaryChannels => &mut self.primary_channels,
            Field::Deliverables => &mut self.deliverables,
            Field::Timings => &mut self.timings,
            Field::BrandAssets => &mut self.brand_assets,
            Field::Approvals => &mut self.approvals,
            Field::Measurement => &mut self.measurement,
            Field::Legal => &mut self.legal,
        }
    }

    /// Replace the value of `field`, leaving every other field untouched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Replace the field named `name`.
    ///
    /// Unknown names are a no-op. Returns whether a field matched.
    pub fn update(&mut self, name: &str, value: impl Into<String>) -> bool {
        match name.parse::<Field>() {
            Ok(field) => {
                self.set(field, value);
                true
            }
            Err(_) => false,
        }
    }

    /// By-value form of [`update`](Self::update).
    pub fn updated(mut self, name: &str, value: impl Into<String>) -> Self {
        self.update(name, value);
        self
    }

    /// Return every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// `(field, value)` pairs in form order.
    pub fn entries(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// Parse a record from its JSON object form.
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| format!("invalid brief JSON: {e}"))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────
