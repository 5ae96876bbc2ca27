pub(super) mod cosmic;
mod high_contrast;
mod solarized;

use super::ThemeDefinition;

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
	cosmic::DEFINITION,
	solarized::DEFINITION,
	high_contrast::DEFINITION,
];
