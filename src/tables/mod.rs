pub mod coefficients;
pub mod works;

pub use coefficients::{
    volume_discount_percent, Complexity, Region, Season, VolumeDiscount, VOLUME_DISCOUNTS,
};
pub use works::{WorkFormula, WORK_FORMULAS};
