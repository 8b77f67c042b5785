//! Calendar periods used by period comparisons.

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Calendar granularity of a period field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodUnit {
    /// Calendar year.
    Year,
    /// Half year, 1 or 2.
    Semester,
    /// Quarter of the year, 1 to 4.
    Quarter,
    /// Month of the year, 1 to 12.
    Month,
}

impl PeriodUnit {
    /// Returns the name of this unit.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            PeriodUnit::Year => "YEAR",
            PeriodUnit::Semester => "SEMESTER",
            PeriodUnit::Quarter => "QUARTER",
            PeriodUnit::Month => "MONTH",
        }
    }
}

/// A calendar period described by the fields holding its components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Period {
    /// Yearly period.
    Year { year: Field },
    /// Half-yearly period within a year.
    Semester { semester: Field, year: Field },
    /// Quarterly period within a year.
    Quarter { quarter: Field, year: Field },
    /// Monthly period within a year.
    Month { month: Field, year: Field },
}

impl Period {
    /// Creates a yearly period.
    #[must_use]
    pub fn year(year: impl Into<Field>) -> Self {
        Period::Year { year: year.into() }
    }

    /// Creates a semester period.
    #[must_use]
    pub fn semester(semester: impl Into<Field>, year: impl Into<Field>) -> Self {
        Period::Semester {
            semester: semester.into(),
            year: year.into(),
        }
    }

    /// Creates a quarter period.
    #[must_use]
    pub fn quarter(quarter: impl Into<Field>, year: impl Into<Field>) -> Self {
        Period::Quarter {
            quarter: quarter.into(),
            year: year.into(),
        }
    }

    /// Creates a month period.
    #[must_use]
    pub fn month(month: impl Into<Field>, year: impl Into<Field>) -> Self {
        Period::Month {
            month: month.into(),
            year: year.into(),
        }
    }

    /// Returns each field of the period with the unit it holds.
    ///
    /// The finest unit comes first, the year last.
    #[must_use]
    pub fn mapping(&self) -> Vec<(&Field, PeriodUnit)> {
        match self {
            Period::Year { year } => vec![(year, PeriodUnit::Year)],
            Period::Semester { semester, year } => {
                vec![(semester, PeriodUnit::Semester), (year, PeriodUnit::Year)]
            }
            Period::Quarter { quarter, year } => {
                vec![(quarter, PeriodUnit::Quarter), (year, PeriodUnit::Year)]
            }
            Period::Month { month, year } => {
                vec![(month, PeriodUnit::Month), (year, PeriodUnit::Year)]
            }
        }
    }

    /// Returns the units of the period, year first.
    #[must_use]
    pub fn units(&self) -> &'static [PeriodUnit] {
        match self {
            Period::Year { .. } => &[PeriodUnit::Year],
            Period::Semester { .. } => &[PeriodUnit::Year, PeriodUnit::Semester],
            Period::Quarter { .. } => &[PeriodUnit::Year, PeriodUnit::Quarter],
            Period::Month { .. } => &[PeriodUnit::Year, PeriodUnit::Month],
        }
    }

    /// Returns the field holding the given unit, if the period has one.
    #[must_use]
    pub fn field_for(&self, unit: PeriodUnit) -> Option<&Field> {
        self.mapping()
            .into_iter()
            .find(|(_, u)| *u == unit)
            .map(|(field, _)| field)
    }
}
