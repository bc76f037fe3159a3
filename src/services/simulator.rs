//! Cost-of-living simulator
//!
//! Session state for the "hidup layak" simulation: pick a city and role, get
//! a seeded income and per-dimension costs, adjust costs within the city's
//! reference ranges, and apply random life events. The simulator is entirely
//! in-memory; nothing here touches storage.

use crate::engine::{classify, StatusVerdict};
use crate::error::{LayakError, LayakResult};
use crate::models::Money;
use crate::reference::{
    city_profile, City, CityProfile, CostDimension, EventKind, RandomEvent, Role,
};

/// One simulation session
#[derive(Debug, Clone)]
pub struct Simulation {
    city: City,
    role: Role,
    income: Money,
    /// Extra income accumulated from applied events
    extra_income: Money,
    /// Extra expenses accumulated from applied events
    extra_expenses: Money,
    // Parallel to CostDimension::all()
    costs: Vec<(CostDimension, Money)>,
    /// Events applied this session, in order
    applied_events: Vec<&'static RandomEvent>,
}

impl Simulation {
    /// Start a session for a city and role, seeded with the city's defaults
    pub fn new(city: City, role: Role) -> Self {
        let profile = city_profile(city);
        Self {
            city,
            role,
            income: profile.base_income(role),
            extra_income: Money::zero(),
            extra_expenses: Money::zero(),
            costs: profile.default_costs(),
            applied_events: Vec::new(),
        }
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// The city's static reference profile
    pub fn profile(&self) -> &'static CityProfile {
        city_profile(self.city)
    }

    /// Switch city: re-seeds income and costs, discarding all adjustments
    /// and applied events for the session
    pub fn set_city(&mut self, city: City) {
        *self = Self::new(city, self.role);
    }

    /// Switch role: re-derives income, keeping cost adjustments
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        self.income = city_profile(self.city).base_income(role);
    }

    /// Adjust one cost dimension; the amount must stay inside the city's
    /// reference range
    pub fn set_cost(&mut self, dimension: CostDimension, amount: Money) -> LayakResult<()> {
        let range = self.profile().cost_range(dimension);
        if !range.contains(amount) {
            return Err(LayakError::InvalidInput(format!(
                "{} must be between {} and {} for {}",
                dimension.label(),
                range.min.rupiah(),
                range.max.rupiah(),
                self.city
            )));
        }

        for entry in &mut self.costs {
            if entry.0 == dimension {
                entry.1 = amount;
                return Ok(());
            }
        }
        // costs is seeded with every dimension, so this is unreachable
        Err(LayakError::InvalidInput(format!(
            "unknown cost dimension: {}",
            dimension.label()
        )))
    }

    /// Current amount for one cost dimension
    pub fn cost(&self, dimension: CostDimension) -> Money {
        self.costs
            .iter()
            .find(|(d, _)| *d == dimension)
            .map(|(_, m)| *m)
            .unwrap_or_else(Money::zero)
    }

    /// All costs in display order
    pub fn costs(&self) -> &[(CostDimension, Money)] {
        &self.costs
    }

    /// Apply a life event: income events raise income, expense events raise
    /// total expenses
    pub fn apply_event(&mut self, event: &'static RandomEvent) {
        match event.kind {
            EventKind::Income => self.extra_income += event.impact,
            EventKind::Expense => self.extra_expenses += event.impact.abs(),
        }
        self.applied_events.push(event);
    }

    /// Events applied this session, oldest first
    pub fn applied_events(&self) -> &[&'static RandomEvent] {
        &self.applied_events
    }

    /// Effective monthly income including event bonuses
    pub fn income(&self) -> Money {
        self.income + self.extra_income
    }

    /// Total monthly expenses across all dimensions plus event expenses
    pub fn total_expenses(&self) -> Money {
        self.costs.iter().map(|(_, m)| *m).sum::<Money>() + self.extra_expenses
    }

    /// Money left over each month
    pub fn remaining(&self) -> Money {
        self.income() - self.total_expenses()
    }

    /// Classify the session's current numbers
    pub fn verdict(&self) -> LayakResult<StatusVerdict> {
        classify(self.income(), self.total_expenses())
    }
}
