//! Application-wide constants.
//!
//! Formats, thresholds and eBird boilerplate live here so the bucketing
//! code and the report writers agree on them.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "vesper-ebird";

/// Environment variable naming an explicit settings file.
pub const SETTINGS_ENV_VAR: &str = "VESPER_EBIRD_SETTINGS";

/// Station used when neither the CLI nor the config names one.
pub const DEFAULT_STATION: &str = "NBNC";

/// `chrono` format strings for the inputs and outputs.
pub mod formats {
    /// Session calendar date, e.g. `09/08/20`.
    pub const SESSION_DATE: &str = "%m/%d/%y";
    /// Wall-clock time of day, e.g. `20:43:00`.
    pub const CLOCK_TIME: &str = "%H:%M:%S";
    /// Detection instant, e.g. `09/08/20 20:43:37`.
    pub const DETECTION_INSTANT: &str = "%m/%d/%y %H:%M:%S";
    /// Window instant, e.g. `2020/09/08 21:30:00`.
    pub const WINDOW_INSTANT: &str = "%Y/%m/%d %H:%M:%S";
    /// Window instant without seconds.
    pub const WINDOW_INSTANT_SHORT: &str = "%Y/%m/%d %H:%M";
    /// Single-night shorthand, e.g. `2020/09/08`.
    pub const WINDOW_DATE: &str = "%Y/%m/%d";
    /// Hour label as shown to the user.
    pub const HOUR_MINUTE: &str = "%H:%M";
    /// eBird record-format date, e.g. `9/08/2020`.
    pub const EBIRD_DATE: &str = "%-m/%d/%Y";
}

/// Reporting window rules for overnight sessions.
pub mod window {
    /// Hour at which a single-night window opens and closes.
    pub const NIGHT_BOUNDARY_HOUR: u32 = 12;
    /// A stop on the day after the session start only clips before this hour.
    pub const NEXT_DAY_CUTOFF_HOUR: u32 = 12;
}

/// Call deduplication.
pub mod dedup {
    /// Calls of one species this close together count as one bird.
    pub const REPEAT_CALL_THRESHOLD_SECS: i64 = 15;
}

/// Pseudo-codes that usually indicate an operator slip rather than a bird.
pub const SUSPECT_CODES: &[&str] = &["nowa"];

/// eBird record-format constants.
pub mod ebird {
    /// Country code column.
    pub const COUNTRY_CODE: &str = "US";
    /// Nocturnal flight call count protocol.
    pub const PROTOCOL: &str = "P54";
    /// Number of observers column.
    pub const OBSERVERS: &str = "1";
    /// "All observations reported?" column.
    pub const ALL_OBSERVATIONS_REPORTED: &str = "N";
    /// Trailing part of the submission comment, after the station kit.
    pub const SUBMISSION_COMMENT: &str = "Calls detected using Vesper (https://github.com/HaroldMills/Vesper) unless noted. This checklist was created automatically with vesper-ebird.";
    /// Species comment used when no species note is configured.
    pub const DEFAULT_SPECIES_COMMENT: &str = "Detected automatically using Vesper, available at https://github.com/HaroldMills/Vesper. Classified manually using Vesper. More justification for this identification is available upon request; the call was very typical of this species based on known recordings.";
    /// Species comment for `sp.` groupings.
    pub const GROUP_COMMENT: &str = "Detected automatically in the sound file using Vesper, available at https://github.com/HaroldMills/Vesper. Classified manually. Extraneous noises were not included in this count. Any call within fifteen seconds of the previous call was not counted in the species total, to ensure undercounts rather than overcounts. The NFC number in this comment is the total number of calls identified by Vesper.";
    /// Sentence appended after a configured species note.
    pub const PATTERN_NOTE: &str = "All NFC calls identified here follow this pattern, unless noted. If the number of identified calls does not match the NFC count, the calls occurred close enough to each other that it was unclear whether a single bird was calling.";
}
