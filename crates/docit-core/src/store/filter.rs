//! Filters and the live filtered views built from them.

use crate::index::Index;
use crate::models::{Appointment, Patient};

/// A predicate over stored entities.
pub trait Filter<T> {
    fn matches(&self, item: &T) -> bool;
}

/// Which patients the patient view shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PatientFilter {
    #[default]
    All,
    /// Patients having at least one name word equal to a keyword (ignoring case).
    NameContainsKeywords(Vec<String>),
}

impl Filter<Patient> for PatientFilter {
    fn matches(&self, patient: &Patient) -> bool {
        match self {
            PatientFilter::All => true,
            PatientFilter::NameContainsKeywords(keywords) => keywords
                .iter()
                .any(|keyword| patient.name.contains_word(keyword)),
        }
    }
}

/// Which appointments the appointment view shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppointmentFilter {
    /// Appointments that have not been archived.
    #[default]
    Active,
    Archived,
}

impl Filter<Appointment> for AppointmentFilter {
    fn matches(&self, appointment: &Appointment) -> bool {
        match self {
            AppointmentFilter::Active => !appointment.archived,
            AppointmentFilter::Archived => appointment.archived,
        }
    }
}

/// Read-only, order-preserving projection of a backing slice under a filter.
///
/// Nothing is cached: every read walks the backing slice.
pub struct FilteredView<'a, T, F> {
    items: &'a [T],
    filter: &'a F,
}

impl<'a, T, F> Clone for FilteredView<'a, T, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, F> Copy for FilteredView<'a, T, F> {}

impl<'a, T: 'a, F: Filter<T> + 'a> FilteredView<'a, T, F> {
    pub fn new(items: &'a [T], filter: &'a F) -> Self {
        Self { items, filter }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + 'a {
        let filter = self.filter;
        self.items.iter().filter(move |item| filter.matches(item))
    }

    /// Element at a position of the *visible* sequence.
    pub fn get(&self, index: Index) -> Option<&'a T> {
        self.iter().nth(index.zero_based())
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}
