use crate::calc::{
    ImprovementCalculator, LandCalculator, MilitaryCalculator, ProtectionService, RangeCalculator,
};
use crate::config::EspionageConfig;
use crate::model::{OperationCatalog, QueueReader};

/// Read-only collaborators an operation is resolved against.
pub struct EspionageContext<'a> {
    pub config: &'a EspionageConfig,
    pub catalog: &'a OperationCatalog,
    pub queues: &'a dyn QueueReader,
    pub land: &'a dyn LandCalculator,
    pub military: &'a dyn MilitaryCalculator,
    pub improvements: &'a dyn ImprovementCalculator,
    pub protection: &'a dyn ProtectionService,
    pub range: &'a dyn RangeCalculator,
}
