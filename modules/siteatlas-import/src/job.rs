use std::io::Read;
use std::sync::Arc;

use siteatlas_common::SiteAtlasError;
use siteatlas_registry::LocationStore;

use crate::records::parse_records;
use crate::reconcile::Reconciler;
use crate::stats::ImportStats;

/// Parameters for one import run.
///
/// The file is required by construction; `debug` defaults to off.
pub struct ImportParams<R> {
    csv_file: R,
    debug: bool,
}

impl<R: Read> ImportParams<R> {
    pub fn new(csv_file: R) -> Self {
        Self {
            csv_file,
            debug: false,
        }
    }

    /// Log every node the run creates.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Entry point the host hands a locations file to.
pub struct ImportJob {
    store: Arc<dyn LocationStore>,
}

impl ImportJob {
    pub fn new(store: Arc<dyn LocationStore>) -> Self {
        Self { store }
    }

    /// Read the file fully, parse it, reconcile it. Parser and reconciler
    /// failures surface unchanged.
    pub async fn run<R: Read>(
        &self,
        mut params: ImportParams<R>,
    ) -> Result<ImportStats, SiteAtlasError> {
        let mut raw = Vec::new();
        params
            .csv_file
            .read_to_end(&mut raw)
            .map_err(|e| SiteAtlasError::Io(e.to_string()))?;

        let records = parse_records(&raw)?;
        let reconciler = Reconciler::new(self.store.clone(), params.debug);
        reconciler.reconcile(&records).await
    }
}
