//! Ombre: build a CSS gradient with the keyboard and watch it render live.
//!
//! | key | effect |
//! |-----|--------|
//! | `L` `R` `C` / `Tab` | linear / radial / conic, or cycle |
//! | `←` `→` (Shift: ×15) | nudge the angle |
//! | `A` | type an angle |
//! | `↑` `↓` | select a stop |
//! | `N` / `E`, `Enter` / `Delete` | add / edit / remove the selected stop |
//! | `Ctrl+C` | copy the declaration |
//! | `Esc` | cancel an edit, otherwise quit |

pub mod controls;
pub mod editor;
pub mod session;
mod studio;

pub use studio::Studio;
