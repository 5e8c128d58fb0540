//! Skill progress bars and their one-shot fill animation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two triggers ask for the animation: the skills section scrolling into view
//! and the skills nav link being clicked. Both bump `request_seq`; the skills
//! section component reacts to the counter and schedules fills.
//!
//! A skill moves `unset -> scheduled -> filled` and never back, so however
//! many requests arrive, each bar gets at most one pending fill and one width.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

/// Upper bound for a skill level, in percent.
pub const MAX_LEVEL: u8 = 100;

/// Parse a `data-level` value. Out-of-range numbers are clamped to 0..=100;
/// anything unparsable counts as 0.
#[must_use]
pub fn parse_level(raw: &str) -> u8 {
    let Ok(value) = raw.trim().parse::<f64>() else {
        return 0;
    };
    if value.is_nan() {
        return 0;
    }
    // Clamped to 0..=100 first, so the cast cannot truncate.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let level = value.round().clamp(0.0, f64::from(MAX_LEVEL)) as u8;
    level
}

/// One skill entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillMeter {
    pub name: String,
    /// Target completion percentage, 0..=100.
    pub level: u8,
    /// Rendered width of the progress bar; `None` until the fill lands.
    pub width: Option<String>,
    scheduled: bool,
}

impl SkillMeter {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self { name: name.into(), level: level.min(MAX_LEVEL), width: None, scheduled: false }
    }

    /// Build from the `data-level` metadata of a skill entry.
    pub fn from_metadata(name: impl Into<String>, raw_level: &str) -> Self {
        Self::new(name, parse_level(raw_level))
    }

    /// Value of the `data-level` attribute.
    #[must_use]
    pub fn level_attr(&self) -> String {
        self.level.to_string()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillsState {
    pub skills: Vec<SkillMeter>,
    /// Bumped for every animation request.
    pub request_seq: u64,
}

impl SkillsState {
    pub fn new(skills: Vec<SkillMeter>) -> Self {
        Self { skills, request_seq: 0 }
    }

    /// Ask for the fill animation. Returns the new request number.
    pub fn request_animation(&mut self) -> u64 {
        self.request_seq += 1;
        self.request_seq
    }

    /// Claim every skill that has neither been filled nor scheduled.
    /// Returned indices must each be passed to [`Self::fill`] after the delay.
    pub fn schedule_pending(&mut self) -> Vec<usize> {
        self.skills
            .iter_mut()
            .enumerate()
            .filter(|(_, skill)| !skill.scheduled && skill.width.is_none())
            .map(|(index, skill)| {
                skill.scheduled = true;
                index
            })
            .collect()
    }

    /// Set the bar width to its target. Returns `false` if the skill was
    /// already filled or does not exist.
    pub fn fill(&mut self, index: usize) -> bool {
        let Some(skill) = self.skills.get_mut(index) else {
            return false;
        };
        if skill.width.is_some() {
            return false;
        }
        skill.width = Some(format!("{}%", skill.level));
        skill.scheduled = true;
        true
    }

    #[must_use]
    pub fn width(&self, index: usize) -> Option<&str> {
        self.skills.get(index)?.width.as_deref()
    }
}
