pub mod context;
pub mod dimensions;
pub mod item;
pub mod result;
pub mod selection;

pub use context::{CalculationContext, ClientType};
pub use dimensions::Dimensions;
pub use item::{section, Bucket, CalculatedBy, Category, EstimateItem};
pub use result::{CalculationResult, CostBreakdown};
pub use selection::{
    BowlSelection, CompositeEquipment, EquipmentRef, EquipmentSlot, MaterialSelection, Selection,
    WorkSelection, WorksSelection,
};
