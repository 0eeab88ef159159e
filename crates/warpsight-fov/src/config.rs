//! Engine configuration.
//!
//! Constructed via the builder pattern: [`FovConfig::builder`]. A built
//! config is always valid, so the scan itself never re-checks it.

use crate::error::FovError;

/// How a cell picks the already-resolved cell one row closer to the
/// observer that it is reached from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParentStrategy {
    /// Clamp the column into the previous row's arc. Cheap and always
    /// within one step of the child.
    #[default]
    BoundingBox,
    /// Like [`BoundingBox`](Self::BoundingBox), but when several
    /// neighbouring parents resolve to distinct open floor tiles, take the
    /// one closest to the child's exact centre line, then the one with the
    /// smaller absolute column.
    CenterAligned,
}

/// Configuration for a visibility calculation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FovConfig {
    max_pass: u8,
    max_scan_depth: usize,
    parent_strategy: ParentStrategy,
    build_local_space: bool,
}

impl FovConfig {
    /// Default number of passes: direct sight plus one portal hop.
    pub const DEFAULT_MAX_PASS: u8 = 2;

    /// Default cap on nested row scans.
    pub const DEFAULT_MAX_SCAN_DEPTH: usize = 1024;

    /// Create a new builder.
    pub fn builder() -> FovConfigBuilder {
        FovConfigBuilder {
            config: FovConfig::default(),
        }
    }

    /// Highest pass that may reveal cells.
    pub fn max_pass(&self) -> u8 {
        self.max_pass
    }

    /// Maximum nesting of row scans before a branch is cut off.
    pub fn max_scan_depth(&self) -> usize {
        self.max_scan_depth
    }

    /// Parent resolution strategy.
    pub fn parent_strategy(&self) -> ParentStrategy {
        self.parent_strategy
    }

    /// Whether every cell of the output view is pre-resolved through the
    /// local-space builder before scanning.
    pub fn build_local_space(&self) -> bool {
        self.build_local_space
    }

    /// Check every setting.
    pub fn validate(&self) -> Result<(), FovError> {
        if self.max_pass == 0 {
            return Err(FovError::InvalidConfig {
                reason: "max_pass must be at least 1".to_string(),
            });
        }
        if self.max_pass == u8::MAX {
            return Err(FovError::InvalidConfig {
                reason: format!("max_pass must be below {}", u8::MAX),
            });
        }
        if self.max_scan_depth == 0 {
            return Err(FovError::InvalidConfig {
                reason: "max_scan_depth must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for FovConfig {
    fn default() -> Self {
        Self {
            max_pass: Self::DEFAULT_MAX_PASS,
            max_scan_depth: Self::DEFAULT_MAX_SCAN_DEPTH,
            parent_strategy: ParentStrategy::default(),
            build_local_space: false,
        }
    }
}

/// Builder for [`FovConfig`].
#[derive(Clone, Debug)]
pub struct FovConfigBuilder {
    config: FovConfig,
}

impl FovConfigBuilder {
    /// Set the highest pass (default: 2). Must be in `1..255`.
    pub fn max_pass(mut self, max_pass: u8) -> Self {
        self.config.max_pass = max_pass;
        self
    }

    /// Set the nested scan cap (default: 1024). Must be >= 1.
    pub fn max_scan_depth(mut self, depth: usize) -> Self {
        self.config.max_scan_depth = depth;
        self
    }

    /// Set the parent resolution strategy (default: bounding box).
    pub fn parent_strategy(mut self, strategy: ParentStrategy) -> Self {
        self.config.parent_strategy = strategy;
        self
    }

    /// Pre-resolve the whole output view through the local-space builder
    /// (default: off).
    pub fn build_local_space(mut self, enabled: bool) -> Self {
        self.config.build_local_space = enabled;
        self
    }

    /// Build the config, validating all settings.
    ///
    /// # Errors
    ///
    /// Returns [`FovError::InvalidConfig`] if `max_pass` is 0 or 255, or
    /// `max_scan_depth` is 0.
    pub fn build(self) -> Result<FovConfig, FovError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
