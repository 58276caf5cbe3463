//! Piecewise health heuristics. All values are signed toward Black: +1 is a
//! certainly alive black group, -1 a certainly alive white group.

use crate::eye::EyeType;
use log::warn;

const BEST_TWO_EYED_HEALTH: f32 = 1.0;
const BEST_ALMOST_TWO_EYED_HEALTH: f32 = 0.94;
const BEST_ONE_EYED_HEALTH: f32 = 0.89;

/// Weighted eye count of a group.
pub fn count_eyes(eye_types: impl IntoIterator<Item = EyeType>) -> f32 {
    eye_types.into_iter().map(EyeType::eye_value).sum()
}

/// Absolute health from eyes, liberties and stone count. The Benson check
/// is expensive, so it only runs once a group has two eyes.
pub fn absolute_health(
    side: f32,
    eyes: f32,
    liberties: usize,
    stones: usize,
    unconditionally_alive: impl FnOnce() -> bool,
) -> f32 {
    let health = if eyes >= 2.0 {
        if unconditionally_alive() {
            BEST_TWO_EYED_HEALTH * side
        } else {
            BEST_ALMOST_TWO_EYED_HEALTH * side
        }
    } else if eyes >= 1.5 {
        almost_two_eyed_health(side, liberties)
    } else if eyes >= 1.0 {
        one_eyed_health(side, liberties)
    } else {
        no_eye_health(side, liberties, stones)
    };
    if health.abs() > 1.0 {
        warn!("health {health} out of range with {eyes} eyes, clamping to {side}");
        return side;
    }
    health
}

fn almost_two_eyed_health(side: f32, liberties: usize) -> f32 {
    if liberties > 6 {
        return side * BEST_ALMOST_TWO_EYED_HEALTH.min(1.15 - 20.0 / (liberties as f32 + 23.0));
    }
    side * match liberties {
        0 | 1 => 0.0,
        2 => 0.02,
        3 => 0.05,
        4 => 0.1,
        5 => 0.19,
        _ => 0.29,
    }
}

fn one_eyed_health(side: f32, liberties: usize) -> f32 {
    if liberties > 6 {
        return side * BEST_ONE_EYED_HEALTH.min(1.03 - 20.0 / (liberties as f32 + 20.0));
    }
    side * match liberties {
        0 => 0.0,
        // one eye and a single liberty is as good as captured
        1 => -0.8,
        2 => -0.3,
        3 => -0.2,
        4 => -0.05,
        5 => 0.01,
        _ => 0.19,
    }
}

fn no_eye_health(side: f32, liberties: usize, stones: usize) -> f32 {
    if liberties > 5 {
        return side * 0.8f32.min(1.2 - 46.0 / (liberties as f32 + 40.0));
    }
    if stones == 1 {
        return side * match liberties {
            0 => -1.0,
            1 => -0.6,
            2 => 0.02,
            _ => 0.1,
        };
    }
    side * match liberties {
        0 => -1.0,
        1 => -0.6,
        2 => -0.3,
        3 => 0.02,
        4 => 0.05,
        _ => 0.1,
    }
}

/// Pushes a group's health toward the extreme according to the weakest enemy
/// group it borders, scaled by how much of the group is in contact.
pub fn relative_health(
    absolute: f32,
    weakest_enemy: f32,
    stones_touching_enemy: usize,
    stones: usize,
) -> f32 {
    let proportion = stones_touching_enemy as f32 / (stones as f32 + 2.0);
    (absolute + (absolute + weakest_enemy) * proportion).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_stone_in_open_space() {
        assert_eq!(absolute_health(1.0, 0.0, 4, 1, || unreachable!()), 0.1);
        assert_eq!(absolute_health(-1.0, 0.0, 1, 1, || unreachable!()), 0.6);
        assert_eq!(absolute_health(1.0, 0.0, 2, 3, || unreachable!()), -0.3);
    }

    #[test]
    fn two_eyes_consult_benson() {
        assert_eq!(absolute_health(1.0, 2.0, 8, 6, || true), 1.0);
        assert_eq!(absolute_health(-1.0, 2.2, 8, 6, || false), -0.94);
    }

    #[test]
    fn many_liberties_saturate() {
        let one_eye = absolute_health(1.0, 1.0, 200, 30, || false);
        assert!((one_eye - BEST_ONE_EYED_HEALTH).abs() < 1e-6);
        let no_eye = absolute_health(1.0, 0.5, 6, 8, || false);
        assert!((no_eye - (1.2 - 46.0 / 46.0)).abs() < 1e-6);
        let almost = absolute_health(-1.0, 1.6, 7, 8, || false);
        assert!((almost + (1.15 - 20.0 / 30.0)).abs() < 1e-6);
    }

    #[test]
    fn eye_count_is_weighted() {
        let eyes = count_eyes([EyeType::False, EyeType::True, EyeType::Big]);
        assert!((eyes - 2.29).abs() < 1e-6);
    }

    #[test]
    fn relative_health_is_clamped() {
        assert_eq!(relative_health(0.9, 0.9, 4, 2), 1.0);
        assert!((relative_health(0.2, -0.2, 3, 4) - 0.2).abs() < 1e-6);
        let pushed = relative_health(0.1, 0.5, 2, 2);
        assert!((pushed - 0.4).abs() < 1e-6);
    }
}
