//! Target groups
//!
//! Values accepted by the `indended_for_array` query parameter.

closed_token_set! {
    /// Audience an event is intended for
    pub enum TargetGroup ("target group") {
        Everyone => "vsichni",
        Adults => "dospeli",
        Children => "deti",
        /// Children together with their parents
        Families => "detirodice",
        /// People attending for the first time
        FirstTimeAttendees => "prvouc",
    }
}
