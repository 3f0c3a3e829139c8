//! Event types
//!
//! Values accepted by the `event_type_array` query parameter.

closed_token_set! {
    /// Kind of an organized activity
    pub enum EventType ("type") {
        /// Voluntary work event
        Voluntary => "dobr",
        /// Experience event
        Experience => "zaz",
        Sport => "sportovni",
        /// Educational talk
        EducationalTalk => "prednaska",
        /// Educational course
        EducationalCourses => "vzdelavaci",
        /// Nature-protection field course (OHB)
        EducationalOhb => "ohb",
        LearningProgram => "vyuka",
        /// Learning program with an overnight stay
        ResidentialLearningProgram => "pobyt",
        ClubMeetup => "klub",
        ClubTalk => "klub-predn",
        /// Event open to the general public
        ForPublic => "verejnost",
        Ekostan => "ekostan",
        Exhibition => "vystava",
        ActionGroup => "akcni",
        Internal => "jina",
        GroupMeeting => "schuzka",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_every_token_parses_back() {
        for event_type in EventType::ALL {
            assert_eq!(EventType::from_str(event_type.as_str()).unwrap(), *event_type);
        }
        assert_eq!(EventType::ALL.len(), 16);
    }

    #[test]
    fn test_hyphenated_literal() {
        assert_eq!(EventType::ClubTalk.as_str(), "klub-predn");
        assert_eq!(EventType::ClubTalk.to_string(), "klub-predn");
    }

    #[test]
    fn test_unknown_type_rejected() {
        let err = EventType::from_str("party").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("`party`"));
    }
}
