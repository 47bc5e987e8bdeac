use classgrid_core::models::location::LocationTable;
use mockall::mock;

use crate::source::TableSource;

// Mock table source for testing
mock! {
    pub TableSource {}

    impl TableSource for TableSource {
        fn tables(&self) -> eyre::Result<Vec<LocationTable>>;
    }
}
