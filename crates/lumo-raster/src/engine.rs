/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! The transformation driver
//!
//! The engine is the host-facing way to run operations against an
//! [`ImageStore`]. It owns no pixels itself; the host owns the store
//! and passes it in for every application, so one engine can drive any
//! number of stores.
use std::time::Instant;

use log::trace;

use crate::errors::RasterErrors;
use crate::store::ImageStore;
use crate::traits::OperationsTrait;

/// Applies operations to a store, one at a time or as a queued chain
///
/// Operations can be queued in a builder pattern style and applied in
/// chain order:
///
/// ```
/// use lumo_raster::engine::TransformEngine;
/// use lumo_raster::store::ImageStore;
///
/// let engine = TransformEngine::new();
/// let mut store = ImageStore::new();
/// // nothing queued, so this is a no-op
/// engine.apply_queued(&mut store).unwrap();
/// ```
#[derive(Default)]
pub struct TransformEngine {
    operations: Vec<Box<dyn OperationsTrait>>
}

impl TransformEngine {
    /// Create an engine with an empty operation queue
    #[must_use]
    pub fn new() -> TransformEngine {
        TransformEngine { operations: vec![] }
    }

    /// Add a new operation to the queue
    ///
    /// This is used as a way to chain multiple operations in a builder
    /// pattern style
    pub fn chain_operation(&mut self, operation: Box<dyn OperationsTrait>) -> &mut TransformEngine {
        self.operations.push(operation);
        self
    }

    /// Apply a single operation to the store
    ///
    /// # Errors
    /// - [`RasterErrors::NotLoaded`] when the store is empty
    /// - Any operation error, with the store left unchanged
    pub fn apply(
        &self, store: &mut ImageStore, operation: &dyn OperationsTrait
    ) -> Result<(), RasterErrors> {
        let operation_name = operation.name();

        trace!("Running {}", operation_name);

        let start = Instant::now();

        operation.execute(store)?;

        let stop = Instant::now();

        trace!(
            "Finished running `{operation_name}` in {} ms",
            (stop - start).as_millis()
        );

        Ok(())
    }

    /// Apply every queued operation to the store, in chain order
    ///
    /// The queue is not consumed; the same chain can be applied to
    /// another store afterwards.
    ///
    /// # Errors
    /// The first failing operation stops the chain and is returned
    pub fn apply_queued(&self, store: &mut ImageStore) -> Result<(), RasterErrors> {
        for operation in &self.operations {
            self.apply(store, operation.as_ref())?;
        }
        Ok(())
    }

    /// Rewind the store's current raster to the original
    ///
    /// # Errors
    /// [`RasterErrors::NotLoaded`] when nothing has been loaded yet
    pub fn reset(&self, store: &mut ImageStore) -> Result<(), RasterErrors> {
        store.reset()
    }
}

#[cfg(test)]
mod tests {
    use super::TransformEngine;
    use crate::errors::RasterErrors;
    use crate::store::ImageStore;
    use crate::traits::OperationsTrait;

    struct SetEveryPixel(u32);

    impl OperationsTrait for SetEveryPixel {
        fn name(&self) -> &'static str {
            "Set every pixel"
        }

        fn execute_impl(&self, store: &mut ImageStore) -> Result<(), RasterErrors> {
            store
                .current_mut()?
                .pixels_mut()
                .iter_mut()
                .for_each(|px| *px = self.0);
            Ok(())
        }
    }

    #[test]
    fn operations_require_a_loaded_store() {
        let engine = TransformEngine::new();
        let mut store = ImageStore::new();

        let result = engine.apply(&mut store, &SetEveryPixel(1));
        assert!(matches!(result, Err(RasterErrors::NotLoaded)));
    }

    #[test]
    fn queued_operations_run_in_chain_order() {
        use crate::raster::RasterImage;

        let mut engine = TransformEngine::new();
        engine
            .chain_operation(Box::new(SetEveryPixel(1)))
            .chain_operation(Box::new(SetEveryPixel(2)));

        let mut store = ImageStore::new();
        store.load(RasterImage::filled(0, 2, 2).unwrap());

        engine.apply_queued(&mut store).unwrap();

        // the later chain entry wins
        assert_eq!(store.current().unwrap().get(0, 0).unwrap(), 2);
    }
}
