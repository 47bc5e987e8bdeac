use classgrid_core::models::location::{LocationId, LocationTable};
use eyre::{Result, WrapErr};

use crate::tables::LOCATIONS;

/// Where raw location tables come from.
pub trait TableSource {
    fn tables(&self) -> Result<Vec<LocationTable>>;
}

/// Tables compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl TableSource for EmbeddedSource {
    fn tables(&self) -> Result<Vec<LocationTable>> {
        LOCATIONS
            .iter()
            .map(|(id, table, _)| {
                let location = LocationId::new(*id)
                    .wrap_err_with(|| format!("Invalid embedded location `{id}`"))?;
                Ok(LocationTable::new(location, *table))
            })
            .collect()
    }
}
