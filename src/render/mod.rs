//! Snapshot rendering, split into a pure transform ([`plan`]) and an apply
//! step that writes the resulting instructions to a [`Surface`].

pub mod page;
pub mod plan;

pub use page::{Page, Surface};
pub use plan::{Instruction, RenderPlan, plan};

use crate::system::snapshot::Snapshot;

/// Stable identifiers of the regions a cycle owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegionId {
    TotalMemory,
    UsedMemory,
    NetworkList,
    ComponentsList,
    ProcessList,
}

impl RegionId {
    pub const ALL: [RegionId; 5] = [
        RegionId::TotalMemory,
        RegionId::UsedMemory,
        RegionId::NetworkList,
        RegionId::ComponentsList,
        RegionId::ProcessList,
    ];

    pub const LISTS: [RegionId; 3] = [
        RegionId::NetworkList,
        RegionId::ComponentsList,
        RegionId::ProcessList,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            RegionId::TotalMemory => "total_memory",
            RegionId::UsedMemory => "used_memory",
            RegionId::NetworkList => "network_list",
            RegionId::ComponentsList => "components_list",
            RegionId::ProcessList => "process_list",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            RegionId::TotalMemory => "Total memory",
            RegionId::UsedMemory => "Used memory",
            RegionId::NetworkList => "Networks",
            RegionId::ComponentsList => "Components",
            RegionId::ProcessList => "Processes",
        }
    }

    pub fn is_list(self) -> bool {
        RegionId::LISTS.contains(&self)
    }
}

pub fn apply<S: Surface + ?Sized>(plan: &RenderPlan, surface: &mut S) {
    for instruction in plan.iter() {
        match instruction {
            Instruction::SetText { region, text } => surface.set_text(*region, text),
            Instruction::ReplaceList { region, items } => surface.replace_list(*region, items),
        }
    }
}

/// Plans and applies a snapshot in one step.
pub fn render<S: Surface + ?Sized>(snapshot: &Snapshot, surface: &mut S) {
    apply(&plan(snapshot), surface);
}
