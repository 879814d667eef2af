use crate::model::chart::chart_color::*;

use plotters::prelude::{RGBColor, ViridisRGB};

#[doc = r#"
    Deterministic category -> color assignment.

    - `Palette` : fixed colors indexed by category position (wraps around)
    - `Split`   : the first `boundary` categories get `head`, the rest `tail`
    - `Viridis` : evenly spaced samples of the viridis colormap between `start` and `end`
"#]
#[derive(Debug, Clone, PartialEq)]
pub enum ColorRule {
    Palette(Vec<ChartColor>),
    Split {
        boundary: usize,
        head: ChartColor,
        tail: ChartColor,
    },
    Viridis {
        start: f64,
        end: f64,
    },
}

impl ColorRule {
    #[doc = "Color of the category at `index` in a chart with `count` categories"]
    pub fn color_at(&self, index: usize, count: usize) -> ChartColor {
        match self {
            ColorRule::Palette(colors) => {
                if colors.is_empty() {
                    ChartColor::BLACK
                } else {
                    colors[index % colors.len()]
                }
            }
            ColorRule::Split {
                boundary,
                head,
                tail,
            } => {
                if index < *boundary {
                    *head
                } else {
                    *tail
                }
            }
            ColorRule::Viridis { start, end } => {
                let t: f64 = if count <= 1 {
                    *start
                } else {
                    start + (end - start) * index as f64 / (count - 1) as f64
                };
                viridis(t)
            }
        }
    }

    pub fn colors(&self, count: usize) -> Vec<ChartColor> {
        (0..count).map(|idx| self.color_at(idx, count)).collect()
    }
}

fn viridis(t: f64) -> ChartColor {
    let RGBColor(r, g, b) = ViridisRGB::get_color_normalized(t.clamp(0.0, 1.0), 0.0, 1.0);
    ChartColor(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: ChartColor = ChartColor(52, 152, 219);

    const VIRIDIS_ANCHORS: [ChartColor; 8] = [
        ChartColor(68, 1, 84),
        ChartColor(70, 50, 127),
        ChartColor(54, 92, 141),
        ChartColor(39, 127, 143),
        ChartColor(31, 162, 136),
        ChartColor(74, 194, 110),
        ChartColor(160, 219, 57),
        ChartColor(254, 232, 37),
    ];
    const GREEN: ChartColor = ChartColor(46, 204, 113);

    #[test]
    fn split_groups_write_and_read_operations() {
        let rule: ColorRule = ColorRule::Split {
            boundary: 4,
            head: BLUE,
            tail: GREEN,
        };

        let colors: Vec<ChartColor> = rule.colors(8);
        assert_eq!(&colors[..4], &[BLUE; 4]);
        assert_eq!(&colors[4..], &[GREEN; 4]);
    }

    #[test]
    fn palette_wraps_around() {
        let rule: ColorRule = ColorRule::Palette(vec![BLUE, GREEN]);
        assert_eq!(rule.color_at(2, 3), BLUE);
        assert_eq!(rule.color_at(3, 4), GREEN);
    }

    #[test]
    fn viridis_samples_are_evenly_spaced_and_repeatable() {
        let rule: ColorRule = ColorRule::Viridis {
            start: 0.0,
            end: 1.0,
        };

        let colors: Vec<ChartColor> = rule.colors(8);
        assert_eq!(colors, VIRIDIS_ANCHORS.to_vec());
        assert_eq!(rule.colors(8), colors);
    }

    #[test]
    fn viridis_clamps_out_of_range_positions() {
        let rule: ColorRule = ColorRule::Viridis {
            start: -1.0,
            end: 2.0,
        };
        assert_eq!(rule.color_at(0, 2), VIRIDIS_ANCHORS[0]);
        assert_eq!(rule.color_at(1, 2), VIRIDIS_ANCHORS[7]);
    }

    #[test]
    fn single_category_uses_start_of_range() {
        let rule: ColorRule = ColorRule::Viridis {
            start: 3.0 / 7.0,
            end: 0.8,
        };
        assert_eq!(rule.color_at(0, 1), VIRIDIS_ANCHORS[3]);
    }
}
