//! Status lines printed under the rendered views.

use crate::core::Player;

/// Key help shown on the last status line.
pub const HELP_LINE: &str = "[WASD]: Move / Q: Quit";

/// Position and heading line.
pub fn position_line(player: &Player) -> String {
    format!(
        "pos=({:.2}, {:.2}) yaw={:.1} deg",
        player.x,
        player.z,
        player.yaw_degrees()
    )
}

/// Both status lines, top to bottom.
pub fn status_lines(player: &Player) -> [String; 2] {
    [position_line(player), HELP_LINE.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_line_formats_degrees() {
        let p = Player::new(14.0, 14.25, std::f32::consts::FRAC_PI_2);
        assert_eq!(position_line(&p), "pos=(14.00, 14.25) yaw=90.0 deg");
    }

    #[test]
    fn help_line_is_last() {
        let p = Player::new(1.0, 1.0, 0.0);
        assert_eq!(status_lines(&p)[1], HELP_LINE);
    }
}
