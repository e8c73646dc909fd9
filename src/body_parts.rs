// src/body_parts.rs
//
// BODY_25 body part and element naming.
// Fixed index <-> name mapping used by the parser, the report matrix and
// every report/plot label.

use std::fmt;

pub const BODY_PART_COUNT: usize = 25;
pub const ELEMENT_COUNT: usize = 4;

/// One of the 25 keypoints of the BODY_25 pose model, in model index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BodyPart {
    Nose,
    Neck,
    RShoulder,
    RElbow,
    RWrist,
    LShoulder,
    LElbow,
    LWrist,
    MidHip,
    RHip,
    RKnee,
    RAnkle,
    LHip,
    LKnee,
    LAnkle,
    REye,
    LEye,
    REar,
    LEar,
    LBigToe,
    LSmallToe,
    LHeel,
    RBigToe,
    RSmallToe,
    RHeel,
}

impl BodyPart {
    pub const ALL: [BodyPart; BODY_PART_COUNT] = [
        BodyPart::Nose,
        BodyPart::Neck,
        BodyPart::RShoulder,
        BodyPart::RElbow,
        BodyPart::RWrist,
        BodyPart::LShoulder,
        BodyPart::LElbow,
        BodyPart::LWrist,
        BodyPart::MidHip,
        BodyPart::RHip,
        BodyPart::RKnee,
        BodyPart::RAnkle,
        BodyPart::LHip,
        BodyPart::LKnee,
        BodyPart::LAnkle,
        BodyPart::REye,
        BodyPart::LEye,
        BodyPart::REar,
        BodyPart::LEar,
        BodyPart::LBigToe,
        BodyPart::LSmallToe,
        BodyPart::LHeel,
        BodyPart::RBigToe,
        BodyPart::RSmallToe,
        BodyPart::RHeel,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<BodyPart> {
        BodyPart::ALL.get(index).copied()
    }

    /// Name as written by the pose logger (`kp <name>:`).
    pub fn name(self) -> &'static str {
        BODY_PART_NAMES[self.index()]
    }

    /// Exact, case-sensitive lookup. "Background" is not a body part.
    pub fn from_name(name: &str) -> Option<BodyPart> {
        BODY_PART_NAMES
            .iter()
            .position(|&n| n == name)
            .and_then(BodyPart::from_index)
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const BODY_PART_NAMES: [&str; BODY_PART_COUNT] = [
    "Nose", "Neck", "RShoulder", "RElbow", "RWrist", "LShoulder", "LElbow", "LWrist", "MidHip",
    "RHip", "RKnee", "RAnkle", "LHip", "LKnee", "LAnkle", "REye", "LEye", "REar", "LEar",
    "LBigToe", "LSmallToe", "LHeel", "RBigToe", "RSmallToe", "RHeel",
];

/// Measurement kind stored per body part and frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    X,
    Y,
    Z,
    Certainty,
}

impl Element {
    pub const ALL: [Element; ELEMENT_COUNT] = [Element::X, Element::Y, Element::Z, Element::Certainty];

    /// The three spatial elements, in plot order.
    pub const COORDINATES: [Element; 3] = [Element::X, Element::Y, Element::Z];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Element> {
        Element::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Element::X => "x",
            Element::Y => "y",
            Element::Z => "z",
            Element::Certainty => "certainty",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Limbs of the BODY_25 skeleton.
pub const BODY_PART_PAIRS: [(BodyPart, BodyPart); 24] = [
    (BodyPart::Neck, BodyPart::MidHip),
    (BodyPart::Neck, BodyPart::RShoulder),
    (BodyPart::Neck, BodyPart::LShoulder),
    (BodyPart::RShoulder, BodyPart::RElbow),
    (BodyPart::RElbow, BodyPart::RWrist),
    (BodyPart::LShoulder, BodyPart::LElbow),
    (BodyPart::LElbow, BodyPart::LWrist),
    (BodyPart::MidHip, BodyPart::RHip),
    (BodyPart::RHip, BodyPart::RKnee),
    (BodyPart::RKnee, BodyPart::RAnkle),
    (BodyPart::MidHip, BodyPart::LHip),
    (BodyPart::LHip, BodyPart::LKnee),
    (BodyPart::LKnee, BodyPart::LAnkle),
    (BodyPart::Neck, BodyPart::Nose),
    (BodyPart::Nose, BodyPart::REye),
    (BodyPart::REye, BodyPart::REar),
    (BodyPart::Nose, BodyPart::LEye),
    (BodyPart::LEye, BodyPart::LEar),
    (BodyPart::LAnkle, BodyPart::LBigToe),
    (BodyPart::LBigToe, BodyPart::LSmallToe),
    (BodyPart::LAnkle, BodyPart::LHeel),
    (BodyPart::RAnkle, BodyPart::RBigToe),
    (BodyPart::RBigToe, BodyPart::RSmallToe),
    (BodyPart::RAnkle, BodyPart::RHeel),
];

/// Order in which the parts appear from left to right in a frontal view.
pub const LEFT_TO_RIGHT_ORDER: [BodyPart; BODY_PART_COUNT] = [
    BodyPart::RWrist,
    BodyPart::RSmallToe,
    BodyPart::RElbow,
    BodyPart::RBigToe,
    BodyPart::RAnkle,
    BodyPart::RShoulder,
    BodyPart::RKnee,
    BodyPart::RHip,
    BodyPart::RHeel,
    BodyPart::REar,
    BodyPart::REye,
    BodyPart::MidHip,
    BodyPart::Neck,
    BodyPart::Nose,
    BodyPart::LEye,
    BodyPart::LEar,
    BodyPart::LHeel,
    BodyPart::LHip,
    BodyPart::LKnee,
    BodyPart::LAnkle,
    BodyPart::LBigToe,
    BodyPart::LShoulder,
    BodyPart::LElbow,
    BodyPart::LSmallToe,
    BodyPart::LWrist,
];

/// Reference frame the logged coordinates are expressed in.
/// Only affects axis labels (`Xcam`, `Ypix`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinateFrame {
    Pixel,
    #[default]
    Camera,
    Robot,
}

impl CoordinateFrame {
    pub fn label_postfix(self) -> &'static str {
        match self {
            CoordinateFrame::Pixel => "pix",
            CoordinateFrame::Camera => "cam",
            CoordinateFrame::Robot => "rob",
        }
    }

    pub fn from_postfix(postfix: &str) -> Option<CoordinateFrame> {
        match postfix {
            "pix" => Some(CoordinateFrame::Pixel),
            "cam" => Some(CoordinateFrame::Camera),
            "rob" => Some(CoordinateFrame::Robot),
            _ => None,
        }
    }

    /// Axis label for a spatial element, e.g. `Xcam`.
    pub fn axis_label(self, element: Element) -> String {
        format!("{}{}", element.name().to_uppercase(), self.label_postfix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_part_round_trip_through_names() {
        for part in BodyPart::ALL {
            assert_eq!(BodyPart::from_name(part.name()), Some(part));
            assert_eq!(BodyPart::from_index(part.index()), Some(part));
        }
    }

    #[test]
    fn test_body_part_indices() {
        assert_eq!(BodyPart::Nose.index(), 0);
        assert_eq!(BodyPart::MidHip.index(), 8);
        assert_eq!(BodyPart::RHeel.index(), 24);
        assert_eq!(BodyPart::from_index(25), None);
    }

    #[test]
    fn test_unknown_names_do_not_resolve() {
        assert_eq!(BodyPart::from_name("Background"), None);
        assert_eq!(BodyPart::from_name("nose"), None);
        assert_eq!(BodyPart::from_name(""), None);
    }

    #[test]
    fn test_element_names() {
        assert_eq!(Element::X.name(), "x");
        assert_eq!(Element::Certainty.name(), "certainty");
        assert_eq!(Element::from_index(3), Some(Element::Certainty));
        assert_eq!(Element::from_index(4), None);
    }

    #[test]
    fn test_left_to_right_order_is_a_permutation() {
        let mut seen = [false; BODY_PART_COUNT];
        for part in LEFT_TO_RIGHT_ORDER {
            assert!(!seen[part.index()], "{} listed twice", part);
            seen[part.index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_axis_label() {
        assert_eq!(CoordinateFrame::Camera.axis_label(Element::X), "Xcam");
        assert_eq!(CoordinateFrame::Pixel.axis_label(Element::Z), "Zpix");
        assert_eq!(CoordinateFrame::from_postfix("rob"), Some(CoordinateFrame::Robot));
        assert_eq!(CoordinateFrame::from_postfix("m"), None);
    }
}
