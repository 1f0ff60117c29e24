// Autogenerated by mtex from embedded DejaVu Sans measurements. DO NOT EDIT.

use super::{kern, KernEntry};

pub(super) static KERNS: &[KernEntry] = &[
    kern("default", 12.0, "regular", "A", "V", -1.0),
    kern("default", 12.0, "regular", "V", "A", -1.0),
    kern("default", 12.0, "regular", "A", "é", 0.0),
    kern("default", 12.0, "regular", "é", "A", 0.0),
    kern("default", 12.0, "regular", "V", "é", -1.0),
    kern("default", 12.0, "regular", "é", "V", 0.0),
    kern("default", 12.0, "regular", "é", "é", 0.0),
    kern("default", 12.0, "regular", "f", "i", 0.0),
    kern("default", 12.0, "regular", "i", "f", 0.0),
    kern("default", 12.0, "regular", "A", "\\sigma", 0.0),
    kern("default", 12.0, "regular", "\\sigma", "A", 0.0),
    kern("default", 12.0, "regular", "a", "\\sigma", 0.0),
    kern("default", 12.0, "regular", "\\sigma", "a", 0.0),
    kern("default", 12.0, "regular", "é", "\\sigma", 0.0),
    kern("default", 12.0, "regular", "\\sigma", "é", 0.0),
    kern("default", 12.0, "regular", "\\sum", "\\sigma", 0.0),
    kern("default", 12.0, "regular", "\\sigma", "\\sum", 0.0),
    kern("default", 12.0, "rm", "A", "V", -1.0),
    kern("default", 12.0, "rm", "V", "A", -1.0),
    kern("default", 12.0, "rm", "A", "é", 0.0),
    kern("default", 12.0, "rm", "é", "A", 0.0),
    kern("default", 12.0, "rm", "V", "é", -1.0),
    kern("default", 12.0, "rm", "é", "V", 0.0),
    kern("default", 12.0, "rm", "é", "é", 0.0),
    kern("default", 12.0, "rm", "f", "i", 0.0),
    kern("default", 12.0, "rm", "i", "f", 0.0),
    kern("default", 12.0, "rm", "A", "\\sigma", 0.0),
    kern("default", 12.0, "rm", "\\sigma", "A", 0.0),
    kern("default", 12.0, "rm", "a", "\\sigma", 0.0),
    kern("default", 12.0, "rm", "\\sigma", "a", 0.0),
    kern("default", 12.0, "rm", "é", "\\sigma", 0.0),
    kern("default", 12.0, "rm", "\\sigma", "é", 0.0),
    kern("default", 12.0, "rm", "\\sum", "\\sigma", 0.0),
    kern("default", 12.0, "rm", "\\sigma", "\\sum", 0.0),
    kern("it", 12.0, "it", "A", "V", -1.0),
    kern("it", 12.0, "it", "V", "A", -1.0),
    kern("it", 12.0, "it", "A", "é", 0.0),
    kern("it", 12.0, "it", "é", "A", 0.0),
    kern("it", 12.0, "it", "V", "é", -1.0),
    kern("it", 12.0, "it", "é", "V", 0.0),
    kern("it", 12.0, "it", "é", "é", 0.0),
    kern("it", 12.0, "it", "f", "i", 0.0),
    kern("it", 12.0, "it", "i", "f", 0.0),
    kern("it", 12.0, "it", "A", "\\sigma", 0.0),
    kern("it", 12.0, "it", "\\sigma", "A", 0.0),
    kern("it", 12.0, "it", "a", "\\sigma", 0.0),
    kern("it", 12.0, "it", "\\sigma", "a", 0.0),
    kern("it", 12.0, "it", "é", "\\sigma", 0.0),
    kern("it", 12.0, "it", "\\sigma", "é", 0.0),
    kern("it", 12.0, "it", "\\sum", "\\sigma", 0.0),
    kern("it", 12.0, "it", "\\sigma", "\\sum", 0.0),
];
