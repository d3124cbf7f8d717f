use studio_types::DesignState;

use crate::errors::LoadError;

/// Walk a loaded document forward from `from_version` to `to_version`,
/// one version step at a time.
///
/// Version 1 is the only format so far; the match below grows an arm per
/// released version (1 => migrate_v1_to_v2, ...) as the format evolves.
pub fn migrate(
    design: DesignState,
    from_version: u32,
    to_version: u32,
) -> Result<DesignState, LoadError> {
    if from_version != to_version {
        return Err(LoadError::MigrationFailed {
            from: from_version,
            to: to_version,
            reason: format!(
                "no migration path from v{} to v{}",
                from_version, to_version
            ),
        });
    }
    Ok(design)
}
