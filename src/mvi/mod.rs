//! Model-View-Intent (MVI) primitives.
//!
//! Game state only changes by feeding an intent through a reducer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot handed to the view
//! - **Intent**: user actions (card picks, new game) or system events (timer, loader)
//! - **Reducer**: pure function `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
