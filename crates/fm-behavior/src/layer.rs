//! Pipeline layers.

use std::fmt;

/// One ordered phase of a step.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Layer {
    Monitor,
    FindReplacements,
    ScheduleMaintenance,
}

impl Layer {
    /// Execution order within a step.  Aggregation follows the last layer.
    pub const ORDER: [Layer; 3] = [
        Layer::Monitor,
        Layer::FindReplacements,
        Layer::ScheduleMaintenance,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Layer::Monitor             => "monitor",
            Layer::FindReplacements    => "find_replacements",
            Layer::ScheduleMaintenance => "schedule_maintenance",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
