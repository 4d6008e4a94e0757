//! Generic schematic of one unity-gain Sallen-Key low-pass stage.
//!
//! Each stage contributes two orders to the filter; cascade `order / 2` of
//! them, output of one into input of the next.

/// ASCII drawing of a stage, labelled with the component names used by
/// [`Components`](crate::design::Components).
pub const SCHEMATIC: &str = r"
                .___| |____._________.
                |   | |    |         |
                |   C1     |  |      |
                |          !__|-\    |
                |             |   \__!___ Vo(s)
          R1    |    R2       |   /
Vi(s) __/\/\/\__!__/\/\/\__.__|+ /
                           |  |/
                           |
                         __|__
                     C2  -----
                           |
                         __|__
                          ---
                           -
";

#[cfg(test)]
mod tests {
    use super::SCHEMATIC;

    #[test]
    fn labels_every_component() {
        for label in ["R1", "R2", "C1", "C2", "Vi(s)", "Vo(s)"] {
            assert!(SCHEMATIC.contains(label), "missing {label}");
        }
    }
}
