//! Event Parameters
//!
//! Fluent builder for the events endpoint. All validation happens in the
//! setters; flattening only formats what was stored.

use bis_core::{params::join_values, BisResult, Id, QueryParams, ToQueryParams};
use bis_models::{EventType, ProgramCode, TargetGroup};
use chrono::{DateTime, Local};

use crate::filter::FilterPreset;
use crate::ordering::Ordering;

/// Query keys of the events endpoint
pub mod keys {
    pub const EVENT_TYPE: &str = "event_type_array";
    pub const PROGRAM: &str = "program_array";
    /// Misspelled on the API side, must be sent as is
    pub const TARGET_GROUP: &str = "indended_for_array";
    pub const ORDERING: &str = "ordering";
    pub const ADMINISTRATIVE_UNIT: &str = "administrative_unit";
    pub const DATE_FROM_GTE: &str = "date_from__gte";
}

/// Date format of `date_from__gte`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One or more organizing unit ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizedBy(Vec<Id>);

impl OrganizedBy {
    pub fn ids(&self) -> &[Id] {
        &self.0
    }
}

impl From<Id> for OrganizedBy {
    fn from(id: Id) -> Self {
        Self(vec![id])
    }
}

impl From<Vec<Id>> for OrganizedBy {
    fn from(ids: Vec<Id>) -> Self {
        Self(ids)
    }
}

impl From<&[Id]> for OrganizedBy {
    fn from(ids: &[Id]) -> Self {
        Self(ids.to_vec())
    }
}

impl<const N: usize> From<[Id; N]> for OrganizedBy {
    fn from(ids: [Id; N]) -> Self {
        Self(ids.to_vec())
    }
}

/// Builder for events endpoint parameters
///
/// Each list setter comes in a singular and a plural form. Both replace the
/// current list; neither appends.
///
/// A builder is meant to be owned by a single request flow. Share it across
/// threads only behind external synchronization.
#[derive(Debug, Clone)]
pub struct EventParameters {
    ordering: Ordering,
    filter: Option<FilterPreset>,
    types: Vec<EventType>,
    programs: Vec<ProgramCode>,
    target_groups: Vec<TargetGroup>,
    organized_by: OrganizedBy,
    date_from_greater_than: Option<DateTime<Local>>,
}

impl Default for EventParameters {
    fn default() -> Self {
        Self::new()
    }
}

impl EventParameters {
    /// Create a new builder ordered by end date
    pub fn new() -> Self {
        Self {
            ordering: Ordering::default(),
            filter: None,
            types: vec![],
            programs: vec![],
            target_groups: vec![],
            organized_by: OrganizedBy::default(),
            date_from_greater_than: None,
        }
        .order_by_date_to()
    }

    // Filter

    /// Set a preset filter
    ///
    /// Accepts a single flag such as [`FilterPreset::CLUB`] or one of the
    /// combinations `WEEKEND | CAMP` and `WEEKEND | EKOSTAN`.
    pub fn set_filter(mut self, bits: u32) -> BisResult<Self> {
        let preset = FilterPreset::from_bits(bits)?;
        tracing::debug!(bits, preset = %preset, "Resolved preset filter");
        // not sent by to_query_params() yet
        self.filter = Some(preset);
        Ok(self)
    }

    /// Set an already resolved preset filter
    pub fn set_filter_preset(mut self, preset: FilterPreset) -> Self {
        tracing::debug!(bits = preset.bits(), preset = %preset, "Resolved preset filter");
        self.filter = Some(preset);
        self
    }

    // Type

    pub fn set_type(self, event_type: EventType) -> Self {
        self.set_types(vec![event_type])
    }

    pub fn set_types(mut self, types: impl Into<Vec<EventType>>) -> Self {
        self.types = types.into();
        self
    }

    // Program

    pub fn set_program(self, program: ProgramCode) -> Self {
        self.set_programs(vec![program])
    }

    pub fn set_programs(mut self, programs: impl Into<Vec<ProgramCode>>) -> Self {
        self.programs = programs.into();
        self
    }

    // Target group

    pub fn set_target_group(self, target_group: TargetGroup) -> Self {
        self.set_target_groups(vec![target_group])
    }

    pub fn set_target_groups(mut self, target_groups: impl Into<Vec<TargetGroup>>) -> Self {
        self.target_groups = target_groups.into();
        self
    }

    // Miscellaneous

    /// Exclude events which are running (started, but not yet ended)
    ///
    /// Running events are included unless this is called.
    pub fn exclude_running(self) -> Self {
        self.exclude_running_at(Local::now())
    }

    /// Exclude events which started before `now`
    pub fn exclude_running_at(mut self, now: DateTime<Local>) -> Self {
        self.date_from_greater_than = Some(now);
        self
    }

    pub fn order_by_date_from(mut self) -> Self {
        self.ordering = Ordering::DateFrom;
        self
    }

    pub fn order_by_date_to(mut self) -> Self {
        self.ordering = Ordering::DateTo;
        self
    }

    /// Restrict to events organized by one unit or any of several units
    pub fn set_organized_by(mut self, unit_ids: impl Into<OrganizedBy>) -> Self {
        self.organized_by = unit_ids.into();
        self
    }

    // Getters

    pub fn ordering(&self) -> Ordering {
        self.ordering
    }

    pub fn filter(&self) -> Option<FilterPreset> {
        self.filter
    }

    pub fn types(&self) -> &[EventType] {
        &self.types
    }

    pub fn programs(&self) -> &[ProgramCode] {
        &self.programs
    }

    pub fn target_groups(&self) -> &[TargetGroup] {
        &self.target_groups
    }

    pub fn organized_by(&self) -> &[Id] {
        self.organized_by.ids()
    }

    pub fn running_excluded_from(&self) -> Option<DateTime<Local>> {
        self.date_from_greater_than
    }

    /// Flatten into query parameters, consuming the builder
    pub fn flatten(self) -> QueryParams {
        self.to_query_params()
    }
}

impl ToQueryParams for EventParameters {
    fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .insert(keys::EVENT_TYPE, join_values(&self.types))
            .insert(keys::PROGRAM, join_values(&self.programs))
            .insert(keys::TARGET_GROUP, join_values(&self.target_groups))
            .insert(keys::ORDERING, self.ordering.as_str())
            .insert(keys::ADMINISTRATIVE_UNIT, join_values(self.organized_by.ids()));

        if let Some(date_from) = self.date_from_greater_than {
            params.insert(keys::DATE_FROM_GTE, date_from.format(DATE_FORMAT).to_string());
        }

        params
    }
}
