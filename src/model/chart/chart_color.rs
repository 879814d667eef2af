use crate::common::*;

#[doc = "Plain 8-bit RGB color used by chart specs; converted to a plotters color at draw time"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChartColor(pub u8, pub u8, pub u8);

impl ChartColor {
    pub const BLACK: ChartColor = ChartColor(0, 0, 0);
    pub const WHITE: ChartColor = ChartColor(255, 255, 255);

    pub fn rgb(&self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}
