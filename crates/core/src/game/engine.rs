//! Simulation engine composition for tick advancement.
//! Each tick runs the player, the adversaries, collisions and the win check, in that order.

use super::*;

mod advance;
