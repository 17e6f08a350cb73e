//! Reference data source port trait.

use crate::domain::company::Company;
use crate::domain::error::DashboardError;
use crate::domain::operation::Operation;
use crate::domain::reference_data::ReferenceData;

pub trait ReferencePort {
    fn load_operations(&self) -> Result<Vec<Operation>, DashboardError>;

    fn load_companies(&self) -> Result<Vec<Company>, DashboardError>;

    /// Default implementation: loads both lists and checks ticker uniqueness.
    fn load(&self) -> Result<ReferenceData, DashboardError> {
        ReferenceData::new(self.load_operations()?, self.load_companies()?)
    }
}
