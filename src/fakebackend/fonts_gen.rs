// Autogenerated by mtex from embedded DejaVu Sans measurements. DO NOT EDIT.

use super::{glyph, GlyphEntry};
use crate::tex::Metrics;

pub(super) static GLYPHS: &[GlyphEntry] = &[
    glyph("a", true, "default", 10.0, "regular", Metrics::new(6.1279296875, 5.734375, 4.625, 0.59375, 5.21875, -0.140625, 5.59375, 5.59375, false)),
    glyph("b", true, "default", 10.0, "regular", Metrics::new(6.34765625, 7.734375, 4.890625, 0.90625, 5.796875, -0.140625, 7.59375, 7.59375, false)),
    glyph("c", true, "default", 10.0, "regular", Metrics::new(5.498046875, 5.734375, 4.328125, 0.546875, 4.875, -0.140625, 5.59375, 5.59375, false)),
    glyph("d", true, "default", 10.0, "regular", Metrics::new(6.34765625, 7.734375, 4.890625, 0.546875, 5.4375, -0.140625, 7.59375, 7.59375, false)),
    glyph("e", true, "default", 10.0, "regular", Metrics::new(6.15234375, 5.734375, 5.078125, 0.546875, 5.625, -0.140625, 5.59375, 5.59375, false)),
    glyph("f", true, "default", 10.0, "regular", Metrics::new(3.5205078125, 7.59375, 3.484375, 0.234375, 3.71875, 0.0, 7.59375, 7.59375, false)),
    glyph("g", true, "default", 10.0, "regular", Metrics::new(6.34765625, 7.671875, 4.890625, 0.546875, 5.4375, -2.078125, 5.59375, 5.59375, false)),
    glyph("h", true, "default", 10.0, "regular", Metrics::new(6.337890625, 7.59375, 4.578125, 0.90625, 5.484375, 0.0, 7.59375, 7.59375, false)),
    glyph("i", true, "default", 10.0, "regular", Metrics::new(2.7783203125, 7.59375, 0.90625, 0.9375, 1.84375, 0.0, 7.59375, 7.59375, false)),
    glyph("j", true, "default", 10.0, "regular", Metrics::new(2.7783203125, 9.671875, 2.03125, -0.1875, 1.84375, -2.078125, 7.59375, 7.59375, false)),
    glyph("k", true, "default", 10.0, "regular", Metrics::new(5.791015625, 7.59375, 4.859375, 0.90625, 5.765625, 0.0, 7.59375, 7.59375, false)),
    glyph("l", true, "default", 10.0, "regular", Metrics::new(2.7783203125, 7.59375, 0.90625, 0.9375, 1.84375, 0.0, 7.59375, 7.59375, false)),
    glyph("m", true, "default", 10.0, "regular", Metrics::new(9.7412109375, 5.59375, 7.984375, 0.90625, 8.890625, 0.0, 5.59375, 5.59375, false)),
    glyph("n", true, "default", 10.0, "regular", Metrics::new(6.337890625, 5.59375, 4.578125, 0.90625, 5.484375, 0.0, 5.59375, 5.59375, false)),
    glyph("o", true, "default", 10.0, "regular", Metrics::new(6.1181640625, 5.734375, 5.03125, 0.546875, 5.578125, -0.140625, 5.59375, 5.59375, false)),
    glyph("p", true, "default", 10.0, "regular", Metrics::new(6.34765625, 7.671875, 4.890625, 0.90625, 5.796875, -2.078125, 5.59375, 5.59375, false)),
    glyph("q", true, "default", 10.0, "regular", Metrics::new(6.34765625, 7.671875, 4.890625, 0.546875, 5.4375, -2.078125, 5.59375, 5.59375, false)),
    glyph("r", true, "default", 10.0, "regular", Metrics::new(4.111328125, 5.59375, 3.203125, 0.90625, 4.109375, 0.0, 5.59375, 5.59375, false)),
    glyph("s", true, "default", 10.0, "regular", Metrics::new(5.2099609375, 5.734375, 4.171875, 0.546875, 4.71875, -0.140625, 5.59375, 5.59375, false)),
    glyph("t", true, "default", 10.0, "regular", Metrics::new(3.9208984375, 7.015625, 3.421875, 0.265625, 3.6875, 0.0, 7.015625, 7.015625, false)),
    glyph("u", true, "default", 10.0, "regular", Metrics::new(6.337890625, 5.734375, 4.59375, 0.84375, 5.4375, -0.140625, 5.59375, 5.59375, false)),
    glyph("v", true, "default", 10.0, "regular", Metrics::new(5.91796875, 5.46875, 5.328125, 0.296875, 5.625, 0.0, 5.46875, 5.46875, false)),
    glyph("w", true, "default", 10.0, "regular", Metrics::new(8.1787109375, 5.46875, 7.34375, 0.421875, 7.765625, 0.0, 5.46875, 5.46875, false)),
    glyph("x", true, "default", 10.0, "regular", Metrics::new(5.91796875, 5.46875, 5.3125, 0.28125, 5.59375, 0.0, 5.46875, 5.46875, false)),
    glyph("y", true, "default", 10.0, "regular", Metrics::new(5.91796875, 7.546875, 5.328125, 0.296875, 5.625, -2.078125, 5.46875, 5.46875, false)),
    glyph("z", true, "default", 10.0, "regular", Metrics::new(5.2490234375, 5.46875, 4.375, 0.4375, 4.8125, 0.0, 5.46875, 5.46875, false)),
    glyph("A", true, "default", 10.0, "regular", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("B", true, "default", 10.0, "regular", Metrics::new(6.8603515625, 7.296875, 5.171875, 0.984375, 6.15625, 0.0, 7.296875, 7.296875, false)),
    glyph("C", true, "default", 10.0, "regular", Metrics::new(6.982421875, 7.5625, 5.875, 0.5625, 6.4375, -0.140625, 7.421875, 7.421875, false)),
    glyph("D", true, "default", 10.0, "regular", Metrics::new(7.7001953125, 7.296875, 6.125, 0.984375, 7.109375, 0.0, 7.296875, 7.296875, false)),
    glyph("E", true, "default", 10.0, "regular", Metrics::new(6.318359375, 7.296875, 4.6875, 0.984375, 5.671875, 0.0, 7.296875, 7.296875, false)),
    glyph("F", true, "default", 10.0, "regular", Metrics::new(5.751953125, 7.296875, 4.1875, 0.984375, 5.171875, 0.0, 7.296875, 7.296875, false)),
    glyph("G", true, "default", 10.0, "regular", Metrics::new(7.7490234375, 7.5625, 6.359375, 0.5625, 6.921875, -0.140625, 7.421875, 7.421875, false)),
    glyph("H", true, "default", 10.0, "regular", Metrics::new(7.51953125, 7.296875, 5.546875, 0.984375, 6.53125, 0.0, 7.296875, 7.296875, false)),
    glyph("I", true, "default", 10.0, "regular", Metrics::new(2.94921875, 7.296875, 0.984375, 0.984375, 1.96875, 0.0, 7.296875, 7.296875, false)),
    glyph("J", true, "default", 10.0, "regular", Metrics::new(2.94921875, 9.296875, 2.484375, -0.515625, 1.96875, -2.0, 7.296875, 7.296875, false)),
    glyph("K", true, "default", 10.0, "regular", Metrics::new(6.5576171875, 7.296875, 5.78125, 0.984375, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("L", true, "default", 10.0, "regular", Metrics::new(5.5712890625, 7.296875, 4.53125, 0.984375, 5.515625, 0.0, 7.296875, 7.296875, false)),
    glyph("M", true, "default", 10.0, "regular", Metrics::new(8.6279296875, 7.296875, 6.671875, 0.984375, 7.65625, 0.0, 7.296875, 7.296875, false)),
    glyph("N", true, "default", 10.0, "regular", Metrics::new(7.48046875, 7.296875, 5.515625, 0.984375, 6.5, 0.0, 7.296875, 7.296875, false)),
    glyph("O", true, "default", 10.0, "regular", Metrics::new(7.87109375, 7.5625, 6.75, 0.5625, 7.3125, -0.140625, 7.421875, 7.421875, false)),
    glyph("P", true, "default", 10.0, "regular", Metrics::new(6.0302734375, 7.296875, 4.703125, 0.984375, 5.6875, 0.0, 7.296875, 7.296875, false)),
    glyph("Q", true, "default", 10.0, "regular", Metrics::new(7.87109375, 8.703125, 6.75, 0.5625, 7.3125, -1.28125, 7.421875, 7.421875, false)),
    glyph("R", true, "default", 10.0, "regular", Metrics::new(6.9482421875, 7.296875, 5.671875, 0.984375, 6.65625, 0.0, 7.296875, 7.296875, false)),
    glyph("S", true, "default", 10.0, "regular", Metrics::new(6.34765625, 7.5625, 5.140625, 0.65625, 5.796875, -0.140625, 7.421875, 7.421875, false)),
    glyph("T", true, "default", 10.0, "regular", Metrics::new(6.1083984375, 7.296875, 6.171875, -0.03125, 6.140625, 0.0, 7.296875, 7.296875, false)),
    glyph("U", true, "default", 10.0, "regular", Metrics::new(7.3193359375, 7.4375, 5.578125, 0.875, 6.453125, -0.140625, 7.296875, 7.296875, false)),
    glyph("V", true, "default", 10.0, "regular", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("W", true, "default", 10.0, "regular", Metrics::new(9.8876953125, 7.296875, 9.234375, 0.328125, 9.5625, 0.0, 7.296875, 7.296875, false)),
    glyph("X", true, "default", 10.0, "regular", Metrics::new(6.8505859375, 7.296875, 6.234375, 0.296875, 6.53125, 0.0, 7.296875, 7.296875, false)),
    glyph("Y", true, "default", 10.0, "regular", Metrics::new(6.1083984375, 7.296875, 6.140625, -0.015625, 6.125, 0.0, 7.296875, 7.296875, false)),
    glyph("Z", true, "default", 10.0, "regular", Metrics::new(6.8505859375, 7.296875, 5.953125, 0.453125, 6.40625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\alpha", true, "default", 10.0, "regular", Metrics::new(6.591796875, 5.71875, 5.5625, 0.546875, 6.109375, -0.125, 5.59375, 5.59375, false)),
    glyph("\\beta", true, "default", 10.0, "regular", Metrics::new(6.3818359375, 9.734375, 4.734375, 0.9375, 5.671875, -2.078125, 7.65625, 7.65625, false)),
    glyph("\\gamma", true, "default", 10.0, "regular", Metrics::new(5.91796875, 7.546875, 5.46875, 0.15625, 5.625, -2.078125, 5.46875, 5.46875, false)),
    glyph("\\delta", true, "default", 10.0, "regular", Metrics::new(6.1181640625, 7.5625, 5.03125, 0.546875, 5.578125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\epsilon", true, "default", 10.0, "regular", Metrics::new(6.15234375, 5.734375, 4.265625, 0.546875, 4.8125, -0.140625, 5.59375, 5.59375, false)),
    glyph("\\varepsilon", true, "default", 10.0, "regular", Metrics::new(5.4052734375, 5.75, 4.078125, 0.65625, 4.734375, -0.140625, 5.609375, 5.609375, false)),
    glyph("\\zeta", true, "default", 10.0, "regular", Metrics::new(5.439453125, 9.6875, 4.453125, 0.515625, 4.96875, -2.09375, 7.59375, 7.59375, false)),
    glyph("\\eta", true, "default", 10.0, "regular", Metrics::new(6.337890625, 7.671875, 4.578125, 0.90625, 5.484375, -2.078125, 5.59375, 5.59375, false)),
    glyph("\\theta", true, "default", 10.0, "regular", Metrics::new(6.1181640625, 7.78125, 5.03125, 0.546875, 5.578125, -0.109375, 7.671875, 7.671875, false)),
    glyph("\\vartheta", true, "default", 10.0, "regular", Metrics::new(6.19140625, 7.78125, 5.03125, 0.546875, 5.578125, -0.109375, 7.671875, 7.671875, false)),
    glyph("\\iota", true, "default", 10.0, "regular", Metrics::new(3.3837890625, 5.46875, 2.21875, 0.8125, 3.03125, 0.0, 5.46875, 5.46875, false)),
    glyph("\\kappa", true, "default", 10.0, "regular", Metrics::new(5.8935546875, 5.46875, 4.71875, 0.9375, 5.65625, 0.0, 5.46875, 5.46875, false)),
    glyph("\\lambda", true, "default", 10.0, "regular", Metrics::new(5.91796875, 7.59375, 5.328125, 0.296875, 5.625, 0.0, 7.59375, 7.59375, false)),
    glyph("\\mu", true, "default", 10.0, "regular", Metrics::new(6.3623046875, 7.546875, 5.28125, 0.84375, 6.125, -2.078125, 5.46875, 5.46875, false)),
    glyph("\\nu", true, "default", 10.0, "regular", Metrics::new(5.5859375, 5.46875, 4.765625, 0.359375, 5.125, 0.0, 5.46875, 5.46875, false)),
    glyph("\\xi", true, "default", 10.0, "regular", Metrics::new(5.576171875, 9.6875, 4.484375, 0.515625, 5.0, -2.09375, 7.59375, 7.59375, false)),
    glyph("\\pi", true, "default", 10.0, "regular", Metrics::new(6.0205078125, 5.65625, 5.390625, 0.359375, 5.75, -0.1875, 5.46875, 5.46875, false)),
    glyph("\\varpi", true, "default", 10.0, "regular", Metrics::new(8.3740234375, 5.609375, 7.71875, 0.3125, 8.03125, -0.140625, 5.46875, 5.46875, false)),
    glyph("\\rho", true, "default", 10.0, "regular", Metrics::new(6.34765625, 7.671875, 4.890625, 0.90625, 5.796875, -2.078125, 5.59375, 5.59375, false)),
    glyph("\\varrho", true, "default", 10.0, "regular", Metrics::new(6.34765625, 7.671875, 4.890625, 0.90625, 5.796875, -2.078125, 5.59375, 5.59375, false)),
    glyph("\\sigma", true, "default", 10.0, "regular", Metrics::new(6.337890625, 5.609375, 5.5, 0.546875, 6.046875, -0.140625, 5.46875, 5.46875, false)),
    glyph("\\varsigma", true, "default", 10.0, "regular", Metrics::new(5.869140625, 7.6875, 4.328125, 0.546875, 4.875, -2.09375, 5.59375, 5.59375, false)),
    glyph("\\tau", true, "default", 10.0, "regular", Metrics::new(6.0205078125, 5.46875, 5.046875, 0.484375, 5.53125, 0.0, 5.46875, 5.46875, false)),
    glyph("\\upsilon", true, "default", 10.0, "regular", Metrics::new(5.7861328125, 5.609375, 4.46875, 0.734375, 5.203125, -0.140625, 5.46875, 5.46875, false)),
    glyph("\\phi", true, "default", 10.0, "regular", Metrics::new(6.5966796875, 9.671875, 5.46875, 0.546875, 6.015625, -2.078125, 7.59375, 7.59375, false)),
    glyph("\\varphi", true, "default", 10.0, "regular", Metrics::new(6.5966796875, 7.59375, 5.46875, 0.546875, 6.015625, -2.078125, 5.515625, 5.515625, false)),
    glyph("\\chi", true, "default", 10.0, "regular", Metrics::new(5.7763671875, 7.546875, 5.203125, 0.28125, 5.484375, -2.078125, 5.46875, 5.46875, false)),
    glyph("\\psi", true, "default", 10.0, "regular", Metrics::new(6.5966796875, 7.546875, 5.46875, 0.546875, 6.015625, -2.078125, 5.46875, 5.46875, false)),
    glyph("\\omega", true, "default", 10.0, "regular", Metrics::new(8.3740234375, 5.609375, 7.03125, 0.65625, 7.6875, -0.140625, 5.46875, 5.46875, false)),
    glyph("\\Gamma", true, "default", 10.0, "regular", Metrics::new(5.5712890625, 7.296875, 4.53125, 0.984375, 5.515625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Delta", true, "default", 10.0, "regular", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Theta", true, "default", 10.0, "regular", Metrics::new(7.87109375, 7.5625, 6.75, 0.5625, 7.3125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\Lambda", true, "default", 10.0, "regular", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Xi", true, "default", 10.0, "regular", Metrics::new(6.318359375, 7.296875, 4.5, 0.984375, 5.484375, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Pi", true, "default", 10.0, "regular", Metrics::new(7.51953125, 7.296875, 5.546875, 0.984375, 6.53125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Sigma", true, "default", 10.0, "regular", Metrics::new(6.318359375, 7.296875, 4.6875, 0.984375, 5.671875, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Upsilon", true, "default", 10.0, "regular", Metrics::new(6.1083984375, 7.296875, 6.140625, -0.015625, 6.125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Phi", true, "default", 10.0, "regular", Metrics::new(7.87109375, 7.296875, 6.75, 0.5625, 7.3125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Psi", true, "default", 10.0, "regular", Metrics::new(7.87109375, 7.296875, 6.75, 0.5625, 7.3125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Omega", true, "default", 10.0, "regular", Metrics::new(7.6416015625, 7.375, 6.890625, 0.375, 7.265625, 0.0, 7.375, 7.375, false)),
    glyph("\\sum", true, "default", 10.0, "regular", Metrics::new(6.73828125, 9.109375, 6.40625, 0.125, 6.53125, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\prod", true, "default", 10.0, "regular", Metrics::new(7.568359375, 9.109375, 6.03125, 0.765625, 6.796875, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\coprod", true, "default", 10.0, "regular", Metrics::new(7.568359375, 9.109375, 6.03125, 0.765625, 6.796875, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\int", true, "default", 10.0, "regular", Metrics::new(5.2099609375, 9.6875, 4.0625, 0.578125, 4.640625, -2.125, 7.5625, 7.5625, true)),
    glyph("\\oint", true, "default", 10.0, "regular", Metrics::new(5.2099609375, 9.6875, 4.0625, 0.578125, 4.640625, -2.125, 7.5625, 7.5625, true)),
    glyph("\\iint", true, "default", 10.0, "regular", Metrics::new(7.890625, 9.6875, 6.734375, 0.578125, 7.3125, -2.125, 7.5625, 7.5625, false)),
    glyph("\\iiint", true, "default", 10.0, "regular", Metrics::new(10.5712890625, 9.6875, 9.421875, 0.578125, 10.0, -2.125, 7.5625, 7.5625, false)),
    glyph("\\bigcap", true, "default", 10.0, "regular", Metrics::new(8.203125, 9.109375, 6.828125, 0.6875, 7.515625, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\bigcup", true, "default", 10.0, "regular", Metrics::new(8.203125, 9.109375, 6.828125, 0.6875, 7.515625, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\bigvee", true, "default", 10.0, "regular", Metrics::new(8.203125, 9.109375, 8.265625, -0.03125, 8.234375, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\bigwedge", true, "default", 10.0, "regular", Metrics::new(8.203125, 9.109375, 8.265625, -0.03125, 8.234375, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\bigoplus", true, "default", 10.0, "regular", Metrics::new(10.0, 9.453125, 9.4375, 0.28125, 9.71875, -1.984375, 7.46875, 7.46875, false)),
    glyph("\\bigotimes", true, "default", 10.0, "regular", Metrics::new(10.0, 9.453125, 9.4375, 0.28125, 9.71875, -1.984375, 7.46875, 7.46875, false)),
    glyph("\\pm", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.265625, 6.25, 1.0625, 7.3125, 0.0, 6.265625, 6.265625, false)),
    glyph("\\mp", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.265625, 6.25, 1.0625, 7.3125, 0.0, 6.265625, 6.265625, false)),
    glyph("\\times", true, "default", 10.0, "regular", Metrics::new(8.37890625, 5.65625, 5.640625, 1.375, 7.015625, 0.3125, 5.96875, 5.96875, false)),
    glyph("\\div", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.8125, 6.25, 1.0625, 7.3125, 0.734375, 5.546875, 5.546875, false)),
    glyph("\\cdot", true, "default", 10.0, "regular", Metrics::new(3.1787109375, 1.234375, 1.03125, 1.0625, 2.09375, 2.859375, 4.09375, 4.09375, false)),
    glyph("\\ast", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.265625, 5.828125, 1.28125, 7.109375, 0.0, 6.265625, 6.265625, false)),
    glyph("\\star", true, "default", 10.0, "regular", Metrics::new(6.259765625, 3.640625, 3.828125, 1.21875, 5.046875, 1.484375, 5.125, 5.125, false)),
    glyph("\\circ", true, "default", 10.0, "regular", Metrics::new(6.259765625, 3.109375, 3.09375, 1.578125, 4.671875, 1.59375, 4.703125, 4.703125, false)),
    glyph("\\bullet", true, "default", 10.0, "regular", Metrics::new(6.259765625, 2.890625, 2.890625, 1.6875, 4.578125, 1.6875, 4.578125, 4.578125, false)),
    glyph("\\cap", true, "default", 10.0, "regular", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\cup", true, "default", 10.0, "regular", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\uplus", true, "default", 10.0, "regular", Metrics::new(7.3193359375, 5.78125, 4.734375, 1.296875, 6.03125, 0.03125, 5.8125, 5.8125, false)),
    glyph("\\sqcap", true, "default", 10.0, "regular", Metrics::new(7.802734375, 6.265625, 5.6875, 1.0625, 6.75, 0.0, 6.265625, 6.265625, false)),
    glyph("\\sqcup", true, "default", 10.0, "regular", Metrics::new(7.802734375, 6.265625, 5.6875, 1.0625, 6.75, 0.0, 6.265625, 6.265625, false)),
    glyph("\\vee", true, "default", 10.0, "regular", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\wedge", true, "default", 10.0, "regular", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\setminus", true, "default", 10.0, "regular", Metrics::new(6.3671875, 8.21875, 3.375, 1.921875, 5.296875, -0.53125, 7.6875, 7.6875, false)),
    glyph("\\wr", true, "default", 10.0, "regular", Metrics::new(3.75, 6.265625, 1.71875, 1.015625, 2.734375, 0.0, 6.265625, 6.265625, false)),
    glyph("\\diamond", true, "default", 10.0, "regular", Metrics::new(6.259765625, 4.984375, 4.984375, 0.640625, 5.625, 0.640625, 5.625, 5.625, false)),
    glyph("\\oplus", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\ominus", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\otimes", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\oslash", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\odot", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\bigcirc", true, "default", 10.0, "regular", Metrics::new(8.7255859375, 7.703125, 7.625, 0.546875, 8.171875, -1.25, 6.453125, 6.453125, false)),
    glyph("\\dagger", true, "default", 10.0, "regular", Metrics::new(5.0, 8.265625, 4.4375, 0.28125, 4.71875, -0.96875, 7.296875, 7.296875, false)),
    glyph("\\ddagger", true, "default", 10.0, "regular", Metrics::new(5.0, 8.265625, 4.4375, 0.28125, 4.71875, -0.96875, 7.296875, 7.296875, false)),
    glyph("\\leq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 5.828125, 6.25, 1.0625, 7.3125, 0.0, 5.828125, 5.828125, false)),
    glyph("\\geq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 5.828125, 6.25, 1.0625, 7.3125, 0.0, 5.828125, 5.828125, false)),
    glyph("\\neq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 5.890625, 6.25, 1.0625, 7.3125, 0.1875, 6.078125, 6.078125, false)),
    glyph("\\equiv", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.46875, 6.25, 1.0625, 7.3125, 0.90625, 5.375, 5.375, false)),
    glyph("\\sim", true, "default", 10.0, "regular", Metrics::new(8.37890625, 1.71875, 6.25, 1.0625, 7.3125, 2.28125, 4.0, 4.0, false)),
    glyph("\\simeq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 3.21875, 6.25, 1.0625, 7.3125, 1.71875, 4.9375, 4.9375, false)),
    glyph("\\approx", true, "default", 10.0, "regular", Metrics::new(8.37890625, 3.609375, 6.25, 1.0625, 7.3125, 1.328125, 4.9375, 4.9375, false)),
    glyph("\\cong", true, "default", 10.0, "regular", Metrics::new(8.37890625, 5.03125, 6.25, 1.0625, 7.3125, 0.90625, 5.9375, 5.9375, false)),
    glyph("\\propto", true, "default", 10.0, "regular", Metrics::new(7.1435546875, 3.75, 4.984375, 1.078125, 6.0625, 1.125, 4.875, 4.875, false)),
    glyph("\\subset", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.671875, 6.390625, 1.0, 7.390625, 0.796875, 5.46875, 5.46875, false)),
    glyph("\\supset", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.671875, 6.390625, 1.0, 7.390625, 0.796875, 5.46875, 5.46875, false)),
    glyph("\\subseteq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.140625, 6.390625, 0.921875, 7.3125, 0.0, 6.140625, 6.140625, false)),
    glyph("\\supseteq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.140625, 6.390625, 1.0625, 7.453125, 0.0, 6.140625, 6.140625, false)),
    glyph("\\in", true, "default", 10.0, "regular", Metrics::new(8.7109375, 7.1875, 7.0, 0.859375, 7.859375, -0.09375, 7.09375, 7.09375, false)),
    glyph("\\ni", true, "default", 10.0, "regular", Metrics::new(8.7109375, 7.1875, 7.0, 0.859375, 7.859375, -0.09375, 7.09375, 7.09375, false)),
    glyph("\\notin", true, "default", 10.0, "regular", Metrics::new(8.7109375, 9.734375, 7.0, 0.859375, 7.859375, -1.375, 8.359375, 8.359375, false)),
    glyph("\\ll", true, "default", 10.0, "regular", Metrics::new(10.46875, 5.875, 9.03125, 0.71875, 9.75, 0.21875, 6.09375, 6.09375, false)),
    glyph("\\gg", true, "default", 10.0, "regular", Metrics::new(10.46875, 5.875, 9.03125, 0.71875, 9.75, 0.21875, 6.09375, 6.09375, false)),
    glyph("\\prec", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.015625, 6.25, 1.0625, 7.3125, -0.375, 6.640625, 6.640625, false)),
    glyph("\\succ", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.015625, 6.25, 1.0625, 7.3125, -0.375, 6.640625, 6.640625, false)),
    glyph("\\mid", true, "default", 10.0, "regular", Metrics::new(5.0, 9.84375, 0.78125, 2.109375, 2.890625, -2.140625, 7.703125, 7.703125, false)),
    glyph("\\parallel", true, "default", 10.0, "regular", Metrics::new(5.0, 9.84375, 2.34375, 1.328125, 3.671875, -2.140625, 7.703125, 7.703125, false)),
    glyph("\\vdash", true, "default", 10.0, "regular", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\dashv", true, "default", 10.0, "regular", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\models", true, "default", 10.0, "regular", Metrics::new(5.205078125, 7.0, 3.5, 0.859375, 4.359375, 0.0, 7.0, 7.0, false)),
    glyph("\\asymp", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.15625, 6.25, 1.0625, 7.3125, 1.046875, 5.203125, 5.203125, false)),
    glyph("\\doteq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.53125, 6.25, 1.0625, 7.3125, 1.71875, 6.25, 6.25, false)),
    glyph("\\bowtie", true, "default", 10.0, "regular", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\leftarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\rightarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\uparrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.328125, 4.28125, 2.046875, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\downarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.328125, 4.28125, 2.046875, 6.328125, -0.03125, 7.296875, 7.296875, false)),
    glyph("\\leftrightarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.40625, 0.484375, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\updownarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.40625, 4.28125, 2.046875, 6.328125, -0.078125, 7.328125, 7.328125, false)),
    glyph("\\Leftarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Rightarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Uparrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.328125, 4.265625, 2.0625, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\Downarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.328125, 4.265625, 2.0625, 6.328125, -0.03125, 7.296875, 7.296875, false)),
    glyph("\\Leftrightarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.40625, 0.484375, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Updownarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.40625, 4.28125, 2.046875, 6.328125, -0.078125, 7.328125, 7.328125, false)),
    glyph("\\mapsto", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\longleftarrow", true, "default", 10.0, "regular", Metrics::new(14.3359375, 4.28125, 13.28125, 0.484375, 13.765625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\longrightarrow", true, "default", 10.0, "regular", Metrics::new(14.3359375, 4.28125, 13.265625, 0.578125, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\hookleftarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.65625, 7.3125, 0.484375, 7.796875, 1.0, 5.65625, 5.65625, false)),
    glyph("\\hookrightarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.65625, 7.3125, 0.578125, 7.890625, 1.0, 5.65625, 5.65625, false)),
    glyph("\\nearrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 5.625, 5.625, 1.40625, 7.03125, 0.25, 5.875, 5.875, false)),
    glyph("\\searrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 5.625, 5.625, 1.40625, 7.03125, 0.25, 5.875, 5.875, false)),
    glyph("\\swarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 5.625, 5.625, 1.40625, 7.03125, 0.25, 5.875, 5.875, false)),
    glyph("\\nwarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 5.625, 5.625, 1.40625, 7.03125, 0.25, 5.875, 5.875, false)),
    glyph("\\leftharpoonup", true, "default", 10.0, "regular", Metrics::new(8.37890625, 2.5625, 7.328125, 0.484375, 7.8125, 2.71875, 5.28125, 5.28125, false)),
    glyph("\\rightharpoonup", true, "default", 10.0, "regular", Metrics::new(8.37890625, 2.5625, 7.3125, 0.578125, 7.890625, 2.71875, 5.28125, 5.28125, false)),
    glyph("\\rightleftharpoons", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.140625, 7.40625, 0.484375, 7.890625, 0.0625, 6.203125, 6.203125, false)),
    glyph("\\infty", true, "default", 10.0, "regular", Metrics::new(8.330078125, 3.75, 6.171875, 1.078125, 7.25, 1.125, 4.875, 4.875, false)),
    glyph("\\partial", true, "default", 10.0, "regular", Metrics::new(5.1708984375, 6.765625, 4.234375, 0.46875, 4.703125, -0.140625, 6.625, 6.625, false)),
    glyph("\\nabla", true, "default", 10.0, "regular", Metrics::new(6.689453125, 7.1875, 6.75, -0.03125, 6.71875, 0.0, 7.1875, 7.1875, false)),
    glyph("\\forall", true, "default", 10.0, "regular", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\exists", true, "default", 10.0, "regular", Metrics::new(6.318359375, 7.296875, 4.6875, 0.984375, 5.671875, 0.0, 7.296875, 7.296875, false)),
    glyph("\\neg", true, "default", 10.0, "regular", Metrics::new(8.37890625, 2.796875, 6.25, 1.0625, 7.3125, 1.40625, 4.203125, 4.203125, false)),
    glyph("\\emptyset", true, "default", 10.0, "regular", Metrics::new(8.7109375, 7.1875, 7.203125, 0.75, 7.953125, -0.09375, 7.09375, 7.09375, false)),
    glyph("\\aleph", true, "default", 10.0, "regular", Metrics::new(7.451171875, 7.5625, 6.625, 0.5, 7.125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\hbar", true, "default", 10.0, "regular", Metrics::new(6.9482421875, 7.59375, 5.1875, 0.59375, 5.78125, 0.0, 7.59375, 7.59375, false)),
    glyph("\\ell", true, "default", 10.0, "regular", Metrics::new(4.130859375, 7.5625, 3.671875, -0.140625, 3.53125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\wp", true, "default", 10.0, "regular", Metrics::new(6.97265625, 7.171875, 6.046875, 0.53125, 6.578125, -2.21875, 4.953125, 4.953125, false)),
    glyph("\\Re", true, "default", 10.0, "regular", Metrics::new(8.1396484375, 7.5625, 7.625, 0.40625, 8.03125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\Im", true, "default", 10.0, "regular", Metrics::new(6.97265625, 7.5625, 6.078125, 0.515625, 6.59375, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\prime", true, "default", 10.0, "regular", Metrics::new(2.2705078125, 1.828125, 1.828125, 0.203125, 2.03125, 5.46875, 7.296875, 7.296875, false)),
    glyph("\\angle", true, "default", 10.0, "regular", Metrics::new(8.96484375, 7.296875, 7.0, 0.859375, 7.859375, 0.0, 7.296875, 7.296875, false)),
    glyph("\\triangle", true, "default", 10.0, "regular", Metrics::new(7.6904296875, 7.65625, 7.625, 0.03125, 7.65625, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\surd", true, "default", 10.0, "regular", Metrics::new(6.3720703125, 8.3125, 6.078125, 0.296875, 6.375, -0.203125, 8.109375, 8.109375, false)),
    glyph("\\top", true, "default", 10.0, "regular", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\bot", true, "default", 10.0, "regular", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\flat", true, "default", 10.0, "regular", Metrics::new(4.716796875, 7.34375, 3.03125, 0.890625, 3.921875, -0.03125, 7.3125, 7.3125, false)),
    glyph("\\natural", true, "default", 10.0, "regular", Metrics::new(3.57421875, 7.3125, 1.890625, 0.84375, 2.734375, 0.0, 7.3125, 7.3125, false)),
    glyph("\\sharp", true, "default", 10.0, "regular", Metrics::new(4.8388671875, 7.3125, 3.15625, 0.84375, 4.0, 0.0, 7.3125, 7.3125, false)),
    glyph("\\clubsuit", true, "default", 10.0, "regular", Metrics::new(8.96484375, 7.28125, 6.734375, 1.109375, 7.84375, 0.0, 7.28125, 7.28125, false)),
    glyph("\\diamondsuit", true, "default", 10.0, "regular", Metrics::new(8.96484375, 7.28125, 5.59375, 1.6875, 7.28125, 0.0, 7.28125, 7.28125, false)),
    glyph("\\heartsuit", true, "default", 10.0, "regular", Metrics::new(8.96484375, 7.265625, 7.15625, 0.90625, 8.0625, 0.0, 7.265625, 7.265625, false)),
    glyph("\\spadesuit", true, "default", 10.0, "regular", Metrics::new(8.96484375, 7.28125, 5.8125, 1.578125, 7.390625, 0.0, 7.28125, 7.28125, false)),
    glyph("\\ldots", true, "default", 10.0, "regular", Metrics::new(10.0, 1.234375, 7.6875, 1.15625, 8.84375, 0.0, 1.234375, 1.234375, false)),
    glyph("\\cdots", true, "default", 10.0, "regular", Metrics::new(10.0, 1.25, 7.6875, 1.15625, 8.84375, 2.484375, 3.734375, 3.734375, false)),
    glyph("\\vdots", true, "default", 10.0, "regular", Metrics::new(10.0, 8.078125, 1.03125, 4.484375, 5.515625, -0.921875, 7.15625, 7.15625, false)),
    glyph("\\ddots", true, "default", 10.0, "regular", Metrics::new(10.0, 8.078125, 7.6875, 1.15625, 8.84375, -0.921875, 7.15625, 7.15625, false)),
    glyph("\\langle", true, "default", 10.0, "regular", Metrics::new(3.9013671875, 8.90625, 2.203125, 0.890625, 3.09375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rangle", true, "default", 10.0, "regular", Metrics::new(3.9013671875, 8.90625, 2.21875, 0.796875, 3.015625, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\lfloor", true, "default", 10.0, "regular", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.859375, 2.9375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rfloor", true, "default", 10.0, "regular", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.96875, 3.046875, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\lceil", true, "default", 10.0, "regular", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.859375, 2.9375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rceil", true, "default", 10.0, "regular", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.96875, 3.046875, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\lbrace", true, "default", 10.0, "regular", Metrics::new(6.3623046875, 9.21875, 3.859375, 1.25, 5.109375, -1.625, 7.59375, 7.59375, false)),
    glyph("\\rbrace", true, "default", 10.0, "regular", Metrics::new(6.3623046875, 9.21875, 3.859375, 1.25, 5.109375, -1.625, 7.59375, 7.59375, false)),
    glyph("\\vert", true, "default", 10.0, "regular", Metrics::new(3.369140625, 10.0, 0.828125, 1.265625, 2.09375, -2.359375, 7.640625, 7.640625, false)),
    glyph("\\Vert", true, "default", 10.0, "regular", Metrics::new(5.0, 10.0, 2.453125, 1.265625, 3.71875, -2.359375, 7.640625, 7.640625, false)),
    glyph("\\backslash", true, "default", 10.0, "regular", Metrics::new(3.369140625, 8.21875, 3.375, 0.0, 3.375, -0.921875, 7.296875, 7.296875, false)),
    glyph("\\S", true, "default", 10.0, "regular", Metrics::new(5.0, 8.375, 4.09375, 0.453125, 4.546875, -0.953125, 7.421875, 7.421875, false)),
    glyph("\\P", true, "default", 10.0, "regular", Metrics::new(6.3623046875, 8.265625, 4.515625, 0.765625, 5.28125, -0.96875, 7.296875, 7.296875, false)),
    glyph("\\copyright", true, "default", 10.0, "regular", Metrics::new(10.0, 7.25, 7.25, 1.375, 8.625, 0.0, 7.25, 7.25, false)),
    glyph("\\degree", true, "default", 10.0, "regular", Metrics::new(5.0, 3.09375, 3.09375, 0.953125, 4.046875, 4.328125, 7.421875, 7.421875, false)),
    glyph("\\imath", true, "default", 10.0, "regular", Metrics::new(2.7783203125, 5.59375, 0.90625, 0.9375, 1.84375, 0.0, 5.59375, 5.59375, false)),
    glyph("\\jmath", true, "default", 10.0, "regular", Metrics::new(2.7783203125, 7.546875, 2.03125, -0.1875, 1.84375, -2.078125, 5.46875, 5.46875, false)),
    glyph("\\nleftarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\nrightarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\twoheadleftarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\twoheadrightarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\leftarrowtail", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\rightarrowtail", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\mapsfrom", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\mapsup", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.328125, 4.265625, 2.0625, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\mapsdown", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.328125, 4.265625, 2.0625, 6.328125, -0.03125, 7.296875, 7.296875, false)),
    glyph("\\looparrowleft", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.65625, 7.3125, 0.484375, 7.796875, 1.0, 5.65625, 5.65625, false)),
    glyph("\\looparrowright", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.65625, 7.3125, 0.578125, 7.890625, 1.0, 5.65625, 5.65625, false)),
    glyph("\\leftrightsquigarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.40625, 0.484375, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\nleftrightarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.421875, 7.40625, 0.484375, 7.890625, 0.921875, 5.34375, 5.34375, false)),
    glyph("\\Lsh", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.4375, 4.609375, 1.6875, 6.296875, 0.0, 7.4375, 7.4375, false)),
    glyph("\\Rsh", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.4375, 4.59375, 2.09375, 6.6875, 0.0, 7.4375, 7.4375, false)),
    glyph("\\curvearrowleft", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.65625, 7.78125, 0.21875, 8.0, 2.03125, 6.6875, 6.6875, false)),
    glyph("\\curvearrowright", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.65625, 7.765625, 0.390625, 8.15625, 2.03125, 6.6875, 6.6875, false)),
    glyph("\\circlearrowleft", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.171875, 6.59375, 1.03125, 7.625, 0.625, 6.796875, 6.796875, false)),
    glyph("\\circlearrowright", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.171875, 6.59375, 0.765625, 7.359375, 0.625, 6.796875, 6.796875, false)),
    glyph("\\leftharpoondown", true, "default", 10.0, "regular", Metrics::new(8.37890625, 2.546875, 7.328125, 0.484375, 7.8125, 1.0, 3.546875, 3.546875, false)),
    glyph("\\upharpoonright", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.328125, 2.546875, 3.78125, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\upharpoonleft", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.328125, 2.5625, 2.046875, 4.609375, 0.0, 7.328125, 7.328125, false)),
    glyph("\\rightharpoondown", true, "default", 10.0, "regular", Metrics::new(8.37890625, 2.546875, 7.3125, 0.578125, 7.890625, 1.0, 3.546875, 3.546875, false)),
    glyph("\\downharpoonright", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.328125, 2.546875, 3.78125, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\downharpoonleft", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.328125, 2.5625, 2.046875, 4.609375, 0.0, 7.328125, 7.328125, false)),
    glyph("\\rightleftarrows", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.203125, 7.40625, 0.484375, 7.890625, -0.46875, 6.734375, 6.734375, false)),
    glyph("\\leftrightarrows", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.203125, 7.40625, 0.484375, 7.890625, -0.46875, 6.734375, 6.734375, false)),
    glyph("\\leftleftarrows", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.203125, 7.328125, 0.484375, 7.8125, -0.46875, 6.734375, 6.734375, false)),
    glyph("\\upuparrows", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.328125, 7.203125, 0.59375, 7.796875, 0.0, 7.328125, 7.328125, false)),
    glyph("\\rightrightarrows", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.203125, 7.3125, 0.578125, 7.890625, -0.46875, 6.734375, 6.734375, false)),
    glyph("\\downdownarrows", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.328125, 7.203125, 0.59375, 7.796875, -0.03125, 7.296875, 7.296875, false)),
    glyph("\\leftrightharpoons", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.140625, 7.40625, 0.484375, 7.890625, 0.0625, 6.203125, 6.203125, false)),
    glyph("\\nLeftarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\nLeftrightarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.390625, 7.40625, 0.484375, 7.890625, 0.9375, 5.328125, 5.328125, false)),
    glyph("\\nRightarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Lleftarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Rrightarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\leftsquigarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\rightsquigarrow", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\longleftrightarrow", true, "default", 10.0, "regular", Metrics::new(14.3359375, 4.28125, 13.359375, 0.484375, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Longleftarrow", true, "default", 10.0, "regular", Metrics::new(14.3359375, 4.28125, 13.28125, 0.484375, 13.765625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Longrightarrow", true, "default", 10.0, "regular", Metrics::new(14.3359375, 4.28125, 13.265625, 0.578125, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Longleftrightarrow", true, "default", 10.0, "regular", Metrics::new(14.3359375, 4.28125, 13.359375, 0.484375, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\longmapsto", true, "default", 10.0, "regular", Metrics::new(14.3359375, 4.28125, 13.265625, 0.578125, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\nmid", true, "default", 10.0, "regular", Metrics::new(5.0, 9.84375, 4.0, 0.5, 4.5, -2.140625, 7.703125, 7.703125, false)),
    glyph("\\nparallel", true, "default", 10.0, "regular", Metrics::new(5.0, 9.84375, 4.0, 0.5, 4.5, -2.140625, 7.703125, 7.703125, false)),
    glyph("\\backsim", true, "default", 10.0, "regular", Metrics::new(8.37890625, 1.71875, 6.25, 1.0625, 7.3125, 2.28125, 4.0, 4.0, false)),
    glyph("\\nsim", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.765625, 6.25, 1.0625, 7.3125, 0.765625, 5.53125, 5.53125, false)),
    glyph("\\eqsim", true, "default", 10.0, "regular", Metrics::new(8.37890625, 3.21875, 6.25, 1.0625, 7.3125, 1.328125, 4.546875, 4.546875, false)),
    glyph("\\ncong", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.625, 6.25, 1.0625, 7.3125, -0.046875, 6.578125, 6.578125, false)),
    glyph("\\napprox", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.21875, 6.25, 1.0625, 7.3125, 0.03125, 6.25, 6.25, false)),
    glyph("\\approxeq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 5.078125, 6.25, 1.0625, 7.3125, 0.90625, 5.984375, 5.984375, false)),
    glyph("\\allequal", true, "default", 10.0, "regular", Metrics::new(8.37890625, 5.03125, 6.25, 1.0625, 7.3125, 0.90625, 5.9375, 5.9375, false)),
    glyph("\\Bumpeq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 5.734375, 6.25, 1.0625, 7.3125, 0.265625, 6.0, 6.0, false)),
    glyph("\\bumpeq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 6.25, 1.0625, 7.3125, 1.71875, 6.0, 6.0, false)),
    glyph("\\Doteq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.234375, 6.25, 1.0625, 7.3125, 0.015625, 6.25, 6.25, false)),
    glyph("\\fallingdotseq", true, "default", 10.0, "regular", Metrics::new(8.388671875, 6.21875, 6.265625, 1.0625, 7.328125, 0.03125, 6.25, 6.25, false)),
    glyph("\\risingdotseq", true, "default", 10.0, "regular", Metrics::new(8.388671875, 6.21875, 6.265625, 1.0625, 7.328125, 0.03125, 6.25, 6.25, false)),
    glyph("\\coloneq", true, "default", 10.0, "regular", Metrics::new(10.0, 3.25, 7.984375, 1.015625, 9.0, 1.515625, 4.765625, 4.765625, false)),
    glyph("\\eqcolon", true, "default", 10.0, "regular", Metrics::new(10.0, 3.234375, 8.0, 1.0, 9.0, 1.515625, 4.75, 4.75, false)),
    glyph("\\eqcirc", true, "default", 10.0, "regular", Metrics::new(8.37890625, 2.828125, 6.25, 1.0625, 7.3125, 1.71875, 4.546875, 4.546875, false)),
    glyph("\\circeq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 5.890625, 6.25, 1.0625, 7.3125, 1.71875, 7.609375, 7.609375, false)),
    glyph("\\wedgeq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.40625, 6.25, 1.0625, 7.3125, 1.71875, 8.125, 8.125, false)),
    glyph("\\veeeq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.40625, 6.25, 1.0625, 7.3125, 1.71875, 8.125, 8.125, false)),
    glyph("\\stareq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.765625, 6.25, 1.0625, 7.3125, 1.71875, 8.484375, 8.484375, false)),
    glyph("\\triangleq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.8125, 6.25, 1.0625, 7.3125, 1.71875, 8.53125, 8.53125, false)),
    glyph("\\nequiv", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.75, 6.25, 1.0625, 7.3125, -0.25, 6.5, 6.5, false)),
    glyph("\\leqq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.203125, 6.265625, 1.0625, 7.328125, -0.828125, 6.375, 6.375, false)),
    glyph("\\geqq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.203125, 6.265625, 1.0625, 7.328125, -0.828125, 6.375, 6.375, false)),
    glyph("\\lneqq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 8.015625, 6.265625, 1.0625, 7.328125, -1.640625, 6.375, 6.375, false)),
    glyph("\\gneqq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 8.015625, 6.265625, 1.0625, 7.328125, -1.640625, 6.375, 6.375, false)),
    glyph("\\between", true, "default", 10.0, "regular", Metrics::new(4.638671875, 8.90625, 2.921875, 0.859375, 3.78125, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\nless", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.703125, 6.25, 1.0625, 7.3125, 0.03125, 6.734375, 6.734375, false)),
    glyph("\\ngtr", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.71875, 6.25, 1.0625, 7.3125, -0.46875, 6.25, 6.25, false)),
    glyph("\\nleq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.6875, 6.25, 1.0625, 7.3125, -1.015625, 6.671875, 6.671875, false)),
    glyph("\\ngeq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.6875, 6.25, 1.0625, 7.3125, -1.015625, 6.671875, 6.671875, false)),
    glyph("\\lesssim", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.375, 6.265625, 1.0625, 7.328125, -0.546875, 5.828125, 5.828125, false)),
    glyph("\\gtrsim", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.21875, 6.265625, 1.0625, 7.328125, -0.390625, 5.828125, 5.828125, false)),
    glyph("\\lessgtr", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.734375, 6.3125, 1.015625, 7.328125, -0.875, 6.859375, 6.859375, false)),
    glyph("\\gtrless", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.734375, 6.3125, 1.015625, 7.328125, -0.875, 6.859375, 6.859375, false)),
    glyph("\\preccurlyeq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.71875, 6.25, 1.0625, 7.3125, -1.046875, 6.671875, 6.671875, false)),
    glyph("\\succcurlyeq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.71875, 6.25, 1.0625, 7.3125, -1.046875, 6.671875, 6.671875, false)),
    glyph("\\precsim", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.515625, 6.25, 1.0625, 7.3125, -0.84375, 6.671875, 6.671875, false)),
    glyph("\\succsim", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.515625, 6.25, 1.0625, 7.3125, -0.84375, 6.671875, 6.671875, false)),
    glyph("\\nprec", true, "default", 10.0, "regular", Metrics::new(8.37890625, 8.25, 6.25, 1.0625, 7.3125, -0.609375, 7.640625, 7.640625, false)),
    glyph("\\nsucc", true, "default", 10.0, "regular", Metrics::new(8.37890625, 8.25, 6.25, 1.0625, 7.3125, -1.375, 6.875, 6.875, false)),
    glyph("\\nsubset", true, "default", 10.0, "regular", Metrics::new(8.37890625, 8.234375, 6.390625, 1.0, 7.390625, -0.96875, 7.265625, 7.265625, false)),
    glyph("\\nsupset", true, "default", 10.0, "regular", Metrics::new(8.37890625, 8.21875, 6.390625, 1.0, 7.390625, -1.0, 7.21875, 7.21875, false)),
    glyph("\\nsubseteq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 8.453125, 6.390625, 0.921875, 7.3125, -1.15625, 7.296875, 7.296875, false)),
    glyph("\\nsupseteq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 8.453125, 6.390625, 1.0625, 7.453125, -1.15625, 7.296875, 7.296875, false)),
    glyph("\\subsetneq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.875, 6.390625, 0.921875, 7.3125, -0.734375, 6.140625, 6.140625, false)),
    glyph("\\supsetneq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.875, 6.390625, 0.921875, 7.3125, -0.734375, 6.140625, 6.140625, false)),
    glyph("\\sqsubset", true, "default", 10.0, "regular", Metrics::new(8.37890625, 5.671875, 6.25, 1.0625, 7.3125, 0.0, 5.671875, 5.671875, false)),
    glyph("\\sqsupset", true, "default", 10.0, "regular", Metrics::new(8.37890625, 5.671875, 6.25, 1.0625, 7.3125, 0.0, 5.671875, 5.671875, false)),
    glyph("\\sqsubseteq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.125, 6.25, 1.0625, 7.3125, -0.828125, 6.296875, 6.296875, false)),
    glyph("\\sqsupseteq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.125, 6.25, 1.0625, 7.3125, -0.828125, 6.296875, 6.296875, false)),
    glyph("\\vDash", true, "default", 10.0, "regular", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\Vdash", true, "default", 10.0, "regular", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\Vvdash", true, "default", 10.0, "regular", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\VDash", true, "default", 10.0, "regular", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\nvdash", true, "default", 10.0, "regular", Metrics::new(8.7109375, 7.78125, 7.0, 0.859375, 7.859375, -0.390625, 7.390625, 7.390625, false)),
    glyph("\\nvDash", true, "default", 10.0, "regular", Metrics::new(8.7109375, 7.78125, 7.0, 0.859375, 7.859375, -0.390625, 7.390625, 7.390625, false)),
    glyph("\\nVdash", true, "default", 10.0, "regular", Metrics::new(8.7109375, 7.78125, 7.0, 0.859375, 7.859375, -0.390625, 7.390625, 7.390625, false)),
    glyph("\\nVDash", true, "default", 10.0, "regular", Metrics::new(8.7109375, 7.78125, 7.0, 0.859375, 7.859375, -0.390625, 7.390625, 7.390625, false)),
    glyph("\\vartriangleleft", true, "default", 10.0, "regular", Metrics::new(8.37890625, 5.984375, 6.25, 1.0625, 7.3125, 0.140625, 6.125, 6.125, false)),
    glyph("\\vartriangleright", true, "default", 10.0, "regular", Metrics::new(8.37890625, 5.984375, 6.25, 1.0625, 7.3125, 0.140625, 6.125, 6.125, false)),
    glyph("\\trianglelefteq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.21875, 6.25, 1.0625, 7.3125, -0.484375, 6.734375, 6.734375, false)),
    glyph("\\trianglerighteq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.21875, 6.25, 1.0625, 7.3125, -0.484375, 6.734375, 6.734375, false)),
    glyph("\\multimap", true, "default", 10.0, "regular", Metrics::new(8.37890625, 2.796875, 7.421875, 0.484375, 7.90625, 1.75, 4.546875, 4.546875, false)),
    glyph("\\backsimeq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 3.21875, 6.25, 1.0625, 7.3125, 1.71875, 4.9375, 4.9375, false)),
    glyph("\\Subset", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.328125, 6.390625, 0.921875, 7.3125, -0.03125, 6.296875, 6.296875, false)),
    glyph("\\Supset", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.328125, 6.390625, 1.0625, 7.453125, -0.03125, 6.296875, 6.296875, false)),
    glyph("\\pitchfork", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.296875, 4.671875, 1.859375, 6.53125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\lessdot", true, "default", 10.0, "regular", Metrics::new(8.37890625, 5.359375, 6.25, 1.0625, 7.3125, 0.453125, 5.8125, 5.8125, false)),
    glyph("\\gtrdot", true, "default", 10.0, "regular", Metrics::new(8.37890625, 5.359375, 6.25, 1.0625, 7.3125, 0.453125, 5.8125, 5.8125, false)),
    glyph("\\lll", true, "default", 10.0, "regular", Metrics::new(14.2236328125, 5.875, 12.78125, 0.71875, 13.5, 0.21875, 6.09375, 6.09375, false)),
    glyph("\\ggg", true, "default", 10.0, "regular", Metrics::new(14.2236328125, 5.875, 12.78125, 0.71875, 13.5, 0.21875, 6.09375, 6.09375, false)),
    glyph("\\lesseqgtr", true, "default", 10.0, "regular", Metrics::new(8.37890625, 10.8125, 6.25, 1.0625, 7.3125, -2.28125, 8.53125, 8.53125, false)),
    glyph("\\gtreqless", true, "default", 10.0, "regular", Metrics::new(8.37890625, 10.8125, 6.25, 1.0625, 7.3125, -2.28125, 8.53125, 8.53125, false)),
    glyph("\\curlyeqprec", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.71875, 6.25, 1.0625, 7.3125, -1.046875, 6.671875, 6.671875, false)),
    glyph("\\curlyeqsucc", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.71875, 6.25, 1.0625, 7.3125, -1.046875, 6.671875, 6.671875, false)),
    glyph("\\npreccurlyeq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 9.421875, 6.25, 1.0625, 7.3125, -1.78125, 7.640625, 7.640625, false)),
    glyph("\\nsucccurlyeq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 9.421875, 6.25, 1.0625, 7.3125, -1.78125, 7.640625, 7.640625, false)),
    glyph("\\nsqsubseteq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 9.078125, 6.25, 1.0625, 7.3125, -1.40625, 7.671875, 7.671875, false)),
    glyph("\\nsqsupseteq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 9.078125, 6.25, 1.0625, 7.3125, -1.40625, 7.671875, 7.671875, false)),
    glyph("\\lnsim", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.203125, 6.265625, 1.0625, 7.328125, -1.375, 5.828125, 5.828125, false)),
    glyph("\\gnsim", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.203125, 6.265625, 1.0625, 7.328125, -1.375, 5.828125, 5.828125, false)),
    glyph("\\precnsim", true, "default", 10.0, "regular", Metrics::new(8.37890625, 8.359375, 6.25, 1.0625, 7.3125, -1.6875, 6.671875, 6.671875, false)),
    glyph("\\succnsim", true, "default", 10.0, "regular", Metrics::new(8.37890625, 8.375, 6.265625, 1.09375, 7.359375, -1.703125, 6.671875, 6.671875, false)),
    glyph("\\ntriangleleft", true, "default", 10.0, "regular", Metrics::new(8.37890625, 8.859375, 6.25, 1.0625, 7.3125, -1.296875, 7.5625, 7.5625, false)),
    glyph("\\ntriangleright", true, "default", 10.0, "regular", Metrics::new(8.37890625, 8.859375, 6.25, 1.0625, 7.3125, -1.296875, 7.5625, 7.5625, false)),
    glyph("\\ntrianglelefteq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 10.046875, 6.25, 1.0625, 7.3125, -1.890625, 8.15625, 8.15625, false)),
    glyph("\\ntrianglerighteq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 10.046875, 6.25, 1.046875, 7.296875, -1.890625, 8.15625, 8.15625, false)),
    glyph("\\leqslant", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.046875, 6.25, 1.0625, 7.3125, -1.234375, 5.8125, 5.8125, false)),
    glyph("\\geqslant", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.046875, 6.25, 1.0625, 7.3125, -1.234375, 5.8125, 5.8125, false)),
    glyph("\\lessapprox", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.953125, 6.265625, 1.0625, 7.328125, -1.328125, 6.625, 6.625, false)),
    glyph("\\gtrapprox", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.953125, 6.265625, 1.0625, 7.328125, -1.328125, 6.625, 6.625, false)),
    glyph("\\lneq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.03125, 6.25, 1.0625, 7.3125, -1.203125, 5.828125, 5.828125, false)),
    glyph("\\gneq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.03125, 6.25, 1.0625, 7.3125, -1.203125, 5.828125, 5.828125, false)),
    glyph("\\lnapprox", true, "default", 10.0, "regular", Metrics::new(8.37890625, 8.65625, 6.265625, 1.0625, 7.328125, -2.03125, 6.625, 6.625, false)),
    glyph("\\gnapprox", true, "default", 10.0, "regular", Metrics::new(8.37890625, 8.65625, 6.265625, 1.0625, 7.328125, -2.03125, 6.625, 6.625, false)),
    glyph("\\lesseqqgtr", true, "default", 10.0, "regular", Metrics::new(8.37890625, 11.015625, 6.25, 1.0625, 7.3125, -3.109375, 7.90625, 7.90625, false)),
    glyph("\\gtreqqless", true, "default", 10.0, "regular", Metrics::new(8.37890625, 11.015625, 6.25, 1.0625, 7.3125, -3.109375, 7.90625, 7.90625, false)),
    glyph("\\eqslantless", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.046875, 6.25, 1.0625, 7.3125, -0.609375, 6.4375, 6.4375, false)),
    glyph("\\eqslantgtr", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.046875, 6.25, 1.0625, 7.3125, -0.609375, 6.4375, 6.4375, false)),
    glyph("\\preceq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.90625, 6.25, 1.0625, 7.3125, -0.234375, 6.671875, 6.671875, false)),
    glyph("\\succeq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.90625, 6.25, 1.0625, 7.3125, -0.234375, 6.671875, 6.671875, false)),
    glyph("\\precneqq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 8.5625, 6.25, 1.0625, 7.3125, -1.953125, 6.609375, 6.609375, false)),
    glyph("\\succneqq", true, "default", 10.0, "regular", Metrics::new(8.37890625, 8.5625, 6.25, 1.0625, 7.3125, -1.953125, 6.609375, 6.609375, false)),
    glyph("\\precapprox", true, "default", 10.0, "regular", Metrics::new(8.37890625, 8.828125, 6.25, 1.0625, 7.3125, -1.90625, 6.921875, 6.921875, false)),
    glyph("\\succapprox", true, "default", 10.0, "regular", Metrics::new(8.37890625, 8.828125, 6.25, 1.0625, 7.3125, -1.90625, 6.921875, 6.921875, false)),
    glyph("\\precnapprox", true, "default", 10.0, "regular", Metrics::new(8.37890625, 9.515625, 6.265625, 1.0625, 7.328125, -2.59375, 6.921875, 6.921875, false)),
    glyph("\\succnapprox", true, "default", 10.0, "regular", Metrics::new(8.37890625, 9.515625, 6.265625, 1.0625, 7.328125, -2.59375, 6.921875, 6.921875, false)),
    glyph("\\dotplus", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.296875, 6.25, 1.0625, 7.3125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\smallsetminus", true, "default", 10.0, "regular", Metrics::new(6.3671875, 8.21875, 3.375, 1.921875, 5.296875, -0.53125, 7.6875, 7.6875, false)),
    glyph("\\dotminus", true, "default", 10.0, "regular", Metrics::new(8.37890625, 2.796875, 6.25, 1.0625, 7.3125, 2.71875, 5.515625, 5.515625, false)),
    glyph("\\cupdot", true, "default", 10.0, "regular", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\circledcirc", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\circledast", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\circleddash", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\boxplus", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\boxminus", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\boxtimes", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\boxdot", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\intercal", true, "default", 10.0, "regular", Metrics::new(5.205078125, 7.0, 2.890625, 1.15625, 4.046875, 0.0, 7.0, 7.0, false)),
    glyph("\\veebar", true, "default", 10.0, "regular", Metrics::new(7.3193359375, 7.40625, 5.359375, 0.984375, 6.34375, 0.0, 7.40625, 7.40625, false)),
    glyph("\\barwedge", true, "default", 10.0, "regular", Metrics::new(7.3193359375, 7.40625, 5.359375, 0.984375, 6.34375, 0.0, 7.40625, 7.40625, false)),
    glyph("\\barvee", true, "default", 10.0, "regular", Metrics::new(7.3193359375, 7.40625, 5.359375, 0.984375, 6.34375, 0.0, 7.40625, 7.40625, false)),
    glyph("\\divideontimes", true, "default", 10.0, "regular", Metrics::new(8.37890625, 5.984375, 6.25, 1.0625, 7.3125, 0.140625, 6.125, 6.125, false)),
    glyph("\\ltimes", true, "default", 10.0, "regular", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\rtimes", true, "default", 10.0, "regular", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\leftthreetimes", true, "default", 10.0, "regular", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\rightthreetimes", true, "default", 10.0, "regular", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\curlyvee", true, "default", 10.0, "regular", Metrics::new(7.32421875, 5.796875, 6.359375, 0.484375, 6.84375, 0.0, 5.796875, 5.796875, false)),
    glyph("\\curlywedge", true, "default", 10.0, "regular", Metrics::new(7.32421875, 5.796875, 6.359375, 0.484375, 6.84375, 0.0, 5.796875, 5.796875, false)),
    glyph("\\Cap", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.625, 6.328125, 1.03125, 7.359375, 0.0, 6.625, 6.625, false)),
    glyph("\\Cup", true, "default", 10.0, "regular", Metrics::new(8.37890625, 6.625, 6.328125, 1.03125, 7.359375, -0.140625, 6.484375, 6.484375, false)),
    glyph("\\doublebarwedge", true, "default", 10.0, "regular", Metrics::new(8.37890625, 5.125, 4.28125, 2.046875, 6.328125, 0.0, 5.125, 5.125, false)),
    glyph("\\bigodot", true, "default", 10.0, "regular", Metrics::new(10.0, 9.453125, 9.4375, 0.28125, 9.71875, -1.984375, 7.46875, 7.46875, false)),
    glyph("\\oiint", true, "default", 10.0, "regular", Metrics::new(7.890625, 9.6875, 6.734375, 0.578125, 7.3125, -2.125, 7.5625, 7.5625, false)),
    glyph("\\oiiint", true, "default", 10.0, "regular", Metrics::new(10.5712890625, 9.6875, 9.421875, 0.578125, 10.0, -2.125, 7.5625, 7.5625, false)),
    glyph("\\iiiint", true, "default", 10.0, "regular", Metrics::new(13.251953125, 9.6875, 12.109375, 0.578125, 12.6875, -2.125, 7.5625, 7.5625, false)),
    glyph("\\minus", true, "default", 10.0, "regular", Metrics::new(8.37890625, 0.828125, 6.25, 1.0625, 7.3125, 2.71875, 3.546875, 3.546875, false)),
    glyph("\\cdotp", true, "default", 10.0, "regular", Metrics::new(3.1787109375, 1.234375, 1.03125, 1.0625, 2.09375, 2.859375, 4.09375, 4.09375, false)),
    glyph("\\hslash", true, "default", 10.0, "regular", Metrics::new(6.337890625, 7.59375, 5.4375, 0.4375, 5.875, 0.0, 7.59375, 7.59375, false)),
    glyph("\\beth", true, "default", 10.0, "regular", Metrics::new(6.73828125, 7.5625, 6.5625, -0.03125, 6.53125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\gimel", true, "default", 10.0, "regular", Metrics::new(4.658203125, 7.765625, 3.9375, 0.125, 4.0625, -0.34375, 7.421875, 7.421875, false)),
    glyph("\\daleth", true, "default", 10.0, "regular", Metrics::new(6.4453125, 7.765625, 5.484375, 0.421875, 5.90625, -0.34375, 7.421875, 7.421875, false)),
    glyph("\\mho", true, "default", 10.0, "regular", Metrics::new(7.6416015625, 7.375, 6.890625, 0.375, 7.265625, -0.140625, 7.234375, 7.234375, false)),
    glyph("\\eth", true, "default", 10.0, "regular", Metrics::new(6.1181640625, 7.734375, 5.03125, 0.546875, 5.578125, -0.140625, 7.59375, 7.59375, false)),
    glyph("\\Finv", true, "default", 10.0, "regular", Metrics::new(5.751953125, 7.296875, 4.1875, 0.984375, 5.171875, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Game", true, "default", 10.0, "regular", Metrics::new(7.7490234375, 7.5625, 6.359375, 0.796875, 7.15625, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\digamma", true, "default", 10.0, "regular", Metrics::new(4.5849609375, 9.671875, 5.03125, -0.9375, 4.09375, -2.078125, 7.59375, 7.59375, false)),
    glyph("\\varkappa", true, "default", 10.0, "regular", Metrics::new(6.6357421875, 5.5625, 5.453125, 0.546875, 6.0, -0.0625, 5.5, 5.5, false)),
    glyph("\\backepsilon", true, "default", 10.0, "regular", Metrics::new(6.15234375, 5.734375, 4.25, 0.953125, 5.203125, -0.140625, 5.59375, 5.59375, false)),
    glyph("\\AA", true, "default", 10.0, "regular", Metrics::new(6.8408203125, 9.28125, 6.6875, 0.078125, 6.765625, 0.0, 9.28125, 9.28125, false)),
    glyph("\\ae", true, "default", 10.0, "regular", Metrics::new(9.8193359375, 5.734375, 8.703125, 0.59375, 9.296875, -0.140625, 5.59375, 5.59375, false)),
    glyph("\\AE", true, "default", 10.0, "regular", Metrics::new(9.7412109375, 7.296875, 9.0625, 0.046875, 9.109375, 0.0, 7.296875, 7.296875, false)),
    glyph("\\oe", true, "default", 10.0, "regular", Metrics::new(10.2294921875, 5.734375, 9.15625, 0.546875, 9.703125, -0.140625, 5.59375, 5.59375, false)),
    glyph("\\OE", true, "default", 10.0, "regular", Metrics::new(10.6982421875, 7.296875, 9.5, 0.5625, 10.0625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\o", true, "default", 10.0, "regular", Metrics::new(6.1181640625, 6.375, 5.40625, 0.359375, 5.765625, -0.453125, 5.921875, 5.921875, false)),
    glyph("\\O", true, "default", 10.0, "regular", Metrics::new(7.87109375, 7.953125, 6.875, 0.5, 7.375, -0.34375, 7.609375, 7.609375, false)),
    glyph("\\ss", true, "default", 10.0, "regular", Metrics::new(6.298828125, 7.734375, 4.9375, 0.90625, 5.84375, -0.140625, 7.59375, 7.59375, false)),
    glyph("\\l", true, "default", 10.0, "regular", Metrics::new(2.841796875, 7.59375, 2.84375, 0.015625, 2.859375, 0.0, 7.59375, 7.59375, false)),
    glyph("\\L", true, "default", 10.0, "regular", Metrics::new(5.6201171875, 7.296875, 5.640625, -0.0625, 5.578125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\complement", true, "default", 10.0, "regular", Metrics::new(6.3623046875, 7.5625, 4.875, 0.65625, 5.53125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\nexists", true, "default", 10.0, "regular", Metrics::new(6.318359375, 8.21875, 4.6875, 0.984375, 5.671875, -0.453125, 7.765625, 7.765625, false)),
    glyph("\\varnothing", true, "default", 10.0, "regular", Metrics::new(8.7109375, 7.1875, 7.203125, 0.75, 7.953125, -0.09375, 7.09375, 7.09375, false)),
    glyph("\\smallin", true, "default", 10.0, "regular", Metrics::new(7.177734375, 4.75, 5.0625, 1.0625, 6.125, 0.75, 5.5, 5.5, false)),
    glyph("\\QED", true, "default", 10.0, "regular", Metrics::new(6.3623046875, 4.859375, 3.421875, 1.46875, 4.890625, 0.0, 4.859375, 4.859375, false)),
    glyph("\\measuredangle", true, "default", 10.0, "regular", Metrics::new(8.96484375, 7.828125, 7.0, 0.859375, 7.859375, -0.53125, 7.296875, 7.296875, false)),
    glyph("\\sphericalangle", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.296875, 6.171875, 1.15625, 7.328125, -0.03125, 7.265625, 7.265625, false)),
    glyph("\\rightangle", true, "default", 10.0, "regular", Metrics::new(8.37890625, 5.625, 5.625, 1.375, 7.0, 0.984375, 6.609375, 6.609375, false)),
    glyph("\\therefore", true, "default", 10.0, "regular", Metrics::new(6.3623046875, 5.046875, 5.171875, 0.59375, 5.765625, 1.0, 6.046875, 6.046875, false)),
    glyph("\\because", true, "default", 10.0, "regular", Metrics::new(6.3623046875, 5.046875, 5.171875, 0.59375, 5.765625, 1.0, 6.046875, 6.046875, false)),
    glyph("\\Colon", true, "default", 10.0, "regular", Metrics::new(6.3623046875, 5.046875, 5.171875, 0.59375, 5.765625, 1.0, 6.046875, 6.046875, false)),
    glyph("\\lnot", true, "default", 10.0, "regular", Metrics::new(8.37890625, 2.796875, 6.25, 1.0625, 7.3125, 1.40625, 4.203125, 4.203125, false)),
    glyph("\\sqrt", true, "default", 10.0, "regular", Metrics::new(6.3720703125, 8.3125, 6.078125, 0.296875, 6.375, -0.203125, 8.109375, 8.109375, false)),
    glyph("\\dots", true, "default", 10.0, "regular", Metrics::new(10.0, 1.234375, 7.6875, 1.15625, 8.84375, 0.0, 1.234375, 1.234375, false)),
    glyph("\\adots", true, "default", 10.0, "regular", Metrics::new(10.0, 8.078125, 7.6875, 1.15625, 8.84375, -0.921875, 7.15625, 7.15625, false)),
    glyph("\\ulcorner", true, "default", 10.0, "regular", Metrics::new(4.6875, 3.34375, 3.171875, 0.859375, 4.03125, 4.25, 7.59375, 7.59375, false)),
    glyph("\\urcorner", true, "default", 10.0, "regular", Metrics::new(4.6875, 3.34375, 3.171875, 0.65625, 3.828125, 4.25, 7.59375, 7.59375, false)),
    glyph("\\llcorner", true, "default", 10.0, "regular", Metrics::new(4.6875, 3.34375, 3.171875, 0.859375, 4.03125, -0.703125, 2.640625, 2.640625, false)),
    glyph("\\lrcorner", true, "default", 10.0, "regular", Metrics::new(4.6875, 3.34375, 3.171875, 0.65625, 3.828125, -0.703125, 2.640625, 2.640625, false)),
    glyph("\\lbrack", true, "default", 10.0, "regular", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.859375, 2.9375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rbrack", true, "default", 10.0, "regular", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.96875, 3.046875, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\leftparen", true, "default", 10.0, "regular", Metrics::new(3.9013671875, 8.90625, 2.234375, 0.859375, 3.09375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rightparen", true, "default", 10.0, "regular", Metrics::new(3.9013671875, 8.90625, 2.25, 0.796875, 3.046875, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\bigtriangleup", true, "default", 10.0, "regular", Metrics::new(7.6904296875, 7.65625, 7.625, 0.03125, 7.65625, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\vartriangle", true, "default", 10.0, "regular", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\blacktriangle", true, "default", 10.0, "regular", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\triangleright", true, "default", 10.0, "regular", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\blacktriangleright", true, "default", 10.0, "regular", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\bigtriangledown", true, "default", 10.0, "regular", Metrics::new(7.6904296875, 7.65625, 7.625, 0.03125, 7.65625, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\triangledown", true, "default", 10.0, "regular", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\blacktriangledown", true, "default", 10.0, "regular", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\triangleleft", true, "default", 10.0, "regular", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\blacktriangleleft", true, "default", 10.0, "regular", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\lozenge", true, "default", 10.0, "regular", Metrics::new(4.94140625, 10.40625, 4.875, 0.03125, 4.90625, -2.328125, 8.078125, 8.078125, false)),
    glyph("\\blacksquare", true, "default", 10.0, "regular", Metrics::new(9.4482421875, 7.65625, 7.640625, 0.90625, 8.546875, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\square", true, "default", 10.0, "regular", Metrics::new(9.4482421875, 7.65625, 7.640625, 0.90625, 8.546875, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\Box", true, "default", 10.0, "regular", Metrics::new(9.4482421875, 7.65625, 7.640625, 0.90625, 8.546875, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\bigstar", true, "default", 10.0, "regular", Metrics::new(8.96484375, 7.28125, 7.65625, 0.65625, 8.3125, -0.046875, 7.234375, 7.234375, false)),
    glyph("\\diagup", true, "default", 10.0, "regular", Metrics::new(6.0205078125, 11.6875, 6.890625, -0.4375, 6.453125, -2.40625, 9.28125, 9.28125, false)),
    glyph("\\diagdown", true, "default", 10.0, "regular", Metrics::new(6.0205078125, 11.6875, 6.890625, -0.4375, 6.453125, -2.40625, 9.28125, 9.28125, false)),
    glyph("\\varspadesuit", true, "default", 10.0, "regular", Metrics::new(8.96484375, 7.296875, 5.8125, 1.578125, 7.390625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\varheartsuit", true, "default", 10.0, "regular", Metrics::new(8.96484375, 7.28125, 7.1875, 0.890625, 8.078125, 0.0, 7.28125, 7.28125, false)),
    glyph("\\vardiamondsuit", true, "default", 10.0, "regular", Metrics::new(8.96484375, 7.28125, 5.59375, 1.6875, 7.28125, 0.0, 7.28125, 7.28125, false)),
    glyph("\\varclubsuit", true, "default", 10.0, "regular", Metrics::new(8.96484375, 7.328125, 6.75, 1.109375, 7.859375, 0.0, 7.328125, 7.328125, false)),
    glyph("\\checkmark", true, "default", 10.0, "regular", Metrics::new(8.37890625, 5.328125, 5.171875, 1.5, 6.671875, 0.96875, 6.296875, 6.296875, false)),
    glyph("\\maltese", true, "default", 10.0, "regular", Metrics::new(8.37890625, 7.296875, 7.28125, 0.546875, 7.828125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\sun", true, "default", 10.0, "regular", Metrics::new(8.96484375, 7.3125, 7.3125, 0.828125, 8.140625, 0.0, 7.3125, 7.3125, false)),
    glyph("\\mercury", true, "default", 10.0, "regular", Metrics::new(6.1376953125, 8.328125, 4.421875, 0.859375, 5.28125, -1.015625, 7.3125, 7.3125, false)),
    glyph("\\venus", true, "default", 10.0, "regular", Metrics::new(7.32421875, 8.5625, 5.609375, 0.859375, 6.46875, -1.25, 7.3125, 7.3125, false)),
    glyph("\\earth", true, "default", 10.0, "regular", Metrics::new(7.32421875, 8.5625, 5.609375, 0.859375, 6.46875, -0.140625, 8.421875, 8.421875, false)),
    glyph("\\mars", true, "default", 10.0, "regular", Metrics::new(8.96484375, 7.34375, 7.515625, 0.796875, 8.3125, -0.140625, 7.203125, 7.203125, false)),
    glyph("\\jupiter", true, "default", 10.0, "regular", Metrics::new(8.96484375, 7.3125, 5.640625, 1.65625, 7.296875, 0.0, 7.3125, 7.3125, false)),
    glyph("\\saturn", true, "default", 10.0, "regular", Metrics::new(8.96484375, 7.3125, 4.578125, 2.1875, 6.765625, 0.0, 7.3125, 7.3125, false)),
    glyph("\\uranus", true, "default", 10.0, "regular", Metrics::new(8.96484375, 7.3125, 6.53125, 1.21875, 7.75, 0.0, 7.3125, 7.3125, false)),
    glyph("\\neptune", true, "default", 10.0, "regular", Metrics::new(8.96484375, 7.3125, 6.421875, 1.265625, 7.6875, 0.0, 7.3125, 7.3125, false)),
    glyph("\\pluto", true, "default", 10.0, "regular", Metrics::new(8.96484375, 7.3125, 4.15625, 2.40625, 6.5625, 0.0, 7.3125, 7.3125, false)),
    glyph("\\male", true, "default", 10.0, "regular", Metrics::new(8.96484375, 7.34375, 7.515625, 0.796875, 8.3125, -0.140625, 7.203125, 7.203125, false)),
    glyph("\\female", true, "default", 10.0, "regular", Metrics::new(7.32421875, 8.5625, 5.609375, 0.859375, 6.46875, -1.25, 7.3125, 7.3125, false)),
    glyph("\\circledR", true, "default", 10.0, "regular", Metrics::new(10.0, 7.25, 7.25, 1.375, 8.625, 0.0, 7.25, 7.25, false)),
    glyph("\\yen", true, "default", 10.0, "regular", Metrics::new(6.3623046875, 7.296875, 5.546875, 0.40625, 5.953125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\sterling", true, "default", 10.0, "regular", Metrics::new(6.3623046875, 7.421875, 4.859375, 0.625, 5.484375, 0.0, 7.421875, 7.421875, false)),
    glyph("\\cent", true, "default", 10.0, "regular", Metrics::new(6.3623046875, 8.53125, 4.328125, 0.84375, 5.171875, -1.53125, 7.0, 7.0, false)),
    glyph("\\backprime", true, "default", 10.0, "regular", Metrics::new(2.2705078125, 1.828125, 1.828125, 0.203125, 2.03125, 5.46875, 7.296875, 7.296875, false)),
    glyph("\\dag", true, "default", 10.0, "regular", Metrics::new(5.0, 8.265625, 4.4375, 0.28125, 4.71875, -0.96875, 7.296875, 7.296875, false)),
    glyph("\\ddag", true, "default", 10.0, "regular", Metrics::new(5.0, 8.265625, 4.4375, 0.28125, 4.71875, -0.96875, 7.296875, 7.296875, false)),
    glyph("é", true, "default", 10.0, "regular", Metrics::new(6.15234375, 8.140625, 5.078125, 0.546875, 5.625, -0.140625, 8.0, 8.0, false)),
    glyph(" ", true, "default", 10.0, "regular", Metrics::new(3.1787109375, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, false)),
    glyph("a", true, "default", 12.0, "regular", Metrics::new(7.353515625, 6.890625, 5.546875, 0.71875, 6.265625, -0.171875, 6.71875, 6.71875, false)),
    glyph("b", true, "default", 12.0, "regular", Metrics::new(7.6171875, 9.296875, 5.875, 1.09375, 6.96875, -0.171875, 9.125, 9.125, false)),
    glyph("c", true, "default", 12.0, "regular", Metrics::new(6.59765625, 6.890625, 5.203125, 0.65625, 5.859375, -0.171875, 6.71875, 6.71875, false)),
    glyph("d", true, "default", 12.0, "regular", Metrics::new(7.6171875, 9.296875, 5.875, 0.65625, 6.53125, -0.171875, 9.125, 9.125, false)),
    glyph("e", true, "default", 12.0, "regular", Metrics::new(7.3828125, 6.890625, 6.09375, 0.65625, 6.75, -0.171875, 6.71875, 6.71875, false)),
    glyph("f", true, "default", 12.0, "regular", Metrics::new(4.224609375, 9.125, 4.171875, 0.28125, 4.453125, 0.0, 9.125, 9.125, false)),
    glyph("g", true, "default", 12.0, "regular", Metrics::new(7.6171875, 9.21875, 5.875, 0.65625, 6.53125, -2.5, 6.71875, 6.71875, false)),
    glyph("h", true, "default", 12.0, "regular", Metrics::new(7.60546875, 9.125, 5.5, 1.09375, 6.59375, 0.0, 9.125, 9.125, false)),
    glyph("i", true, "default", 12.0, "regular", Metrics::new(3.333984375, 9.125, 1.078125, 1.125, 2.203125, 0.0, 9.125, 9.125, false)),
    glyph("j", true, "default", 12.0, "regular", Metrics::new(3.333984375, 11.625, 2.421875, -0.21875, 2.203125, -2.5, 9.125, 9.125, false)),
    glyph("k", true, "default", 12.0, "regular", Metrics::new(6.94921875, 9.125, 5.828125, 1.09375, 6.921875, 0.0, 9.125, 9.125, false)),
    glyph("l", true, "default", 12.0, "regular", Metrics::new(3.333984375, 9.125, 1.078125, 1.125, 2.203125, 0.0, 9.125, 9.125, false)),
    glyph("m", true, "default", 12.0, "regular", Metrics::new(11.689453125, 6.71875, 9.578125, 1.09375, 10.671875, 0.0, 6.71875, 6.71875, false)),
    glyph("n", true, "default", 12.0, "regular", Metrics::new(7.60546875, 6.71875, 5.5, 1.09375, 6.59375, 0.0, 6.71875, 6.71875, false)),
    glyph("o", true, "default", 12.0, "regular", Metrics::new(7.341796875, 6.890625, 6.03125, 0.65625, 6.6875, -0.171875, 6.71875, 6.71875, false)),
    glyph("p", true, "default", 12.0, "regular", Metrics::new(7.6171875, 9.21875, 5.875, 1.09375, 6.96875, -2.5, 6.71875, 6.71875, false)),
    glyph("q", true, "default", 12.0, "regular", Metrics::new(7.6171875, 9.21875, 5.875, 0.65625, 6.53125, -2.5, 6.71875, 6.71875, false)),
    glyph("r", true, "default", 12.0, "regular", Metrics::new(4.93359375, 6.71875, 3.84375, 1.09375, 4.9375, 0.0, 6.71875, 6.71875, false)),
    glyph("s", true, "default", 12.0, "regular", Metrics::new(6.251953125, 6.890625, 5.015625, 0.65625, 5.671875, -0.171875, 6.71875, 6.71875, false)),
    glyph("t", true, "default", 12.0, "regular", Metrics::new(4.705078125, 8.421875, 4.09375, 0.328125, 4.421875, 0.0, 8.421875, 8.421875, false)),
    glyph("u", true, "default", 12.0, "regular", Metrics::new(7.60546875, 6.890625, 5.5, 1.015625, 6.515625, -0.171875, 6.71875, 6.71875, false)),
    glyph("v", true, "default", 12.0, "regular", Metrics::new(7.1015625, 6.5625, 6.390625, 0.359375, 6.75, 0.0, 6.5625, 6.5625, false)),
    glyph("w", true, "default", 12.0, "regular", Metrics::new(9.814453125, 6.5625, 8.8125, 0.5, 9.3125, 0.0, 6.5625, 6.5625, false)),
    glyph("x", true, "default", 12.0, "regular", Metrics::new(7.1015625, 6.5625, 6.359375, 0.34375, 6.703125, 0.0, 6.5625, 6.5625, false)),
    glyph("y", true, "default", 12.0, "regular", Metrics::new(7.1015625, 9.0625, 6.390625, 0.359375, 6.75, -2.5, 6.5625, 6.5625, false)),
    glyph("z", true, "default", 12.0, "regular", Metrics::new(6.298828125, 6.5625, 5.265625, 0.515625, 5.78125, 0.0, 6.5625, 6.5625, false)),
    glyph("A", true, "default", 12.0, "regular", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("B", true, "default", 12.0, "regular", Metrics::new(8.232421875, 8.75, 6.21875, 1.171875, 7.390625, 0.0, 8.75, 8.75, false)),
    glyph("C", true, "default", 12.0, "regular", Metrics::new(8.37890625, 9.078125, 7.0625, 0.671875, 7.734375, -0.171875, 8.90625, 8.90625, false)),
    glyph("D", true, "default", 12.0, "regular", Metrics::new(9.240234375, 8.75, 7.359375, 1.171875, 8.53125, 0.0, 8.75, 8.75, false)),
    glyph("E", true, "default", 12.0, "regular", Metrics::new(7.58203125, 8.75, 5.640625, 1.171875, 6.8125, 0.0, 8.75, 8.75, false)),
    glyph("F", true, "default", 12.0, "regular", Metrics::new(6.90234375, 8.75, 5.03125, 1.171875, 6.203125, 0.0, 8.75, 8.75, false)),
    glyph("G", true, "default", 12.0, "regular", Metrics::new(9.298828125, 9.078125, 7.640625, 0.671875, 8.3125, -0.171875, 8.90625, 8.90625, false)),
    glyph("H", true, "default", 12.0, "regular", Metrics::new(9.0234375, 8.75, 6.671875, 1.171875, 7.84375, 0.0, 8.75, 8.75, false)),
    glyph("I", true, "default", 12.0, "regular", Metrics::new(3.5390625, 8.75, 1.1875, 1.171875, 2.359375, 0.0, 8.75, 8.75, false)),
    glyph("J", true, "default", 12.0, "regular", Metrics::new(3.5390625, 11.15625, 2.984375, -0.625, 2.359375, -2.40625, 8.75, 8.75, false)),
    glyph("K", true, "default", 12.0, "regular", Metrics::new(7.869140625, 8.75, 6.953125, 1.171875, 8.125, 0.0, 8.75, 8.75, false)),
    glyph("L", true, "default", 12.0, "regular", Metrics::new(6.685546875, 8.75, 5.453125, 1.171875, 6.625, 0.0, 8.75, 8.75, false)),
    glyph("M", true, "default", 12.0, "regular", Metrics::new(10.353515625, 8.75, 8.015625, 1.171875, 9.1875, 0.0, 8.75, 8.75, false)),
    glyph("N", true, "default", 12.0, "regular", Metrics::new(8.9765625, 8.75, 6.625, 1.171875, 7.796875, 0.0, 8.75, 8.75, false)),
    glyph("O", true, "default", 12.0, "regular", Metrics::new(9.4453125, 9.078125, 8.09375, 0.671875, 8.765625, -0.171875, 8.90625, 8.90625, false)),
    glyph("P", true, "default", 12.0, "regular", Metrics::new(7.236328125, 8.75, 5.65625, 1.171875, 6.828125, 0.0, 8.75, 8.75, false)),
    glyph("Q", true, "default", 12.0, "regular", Metrics::new(9.4453125, 10.453125, 8.09375, 0.671875, 8.765625, -1.546875, 8.90625, 8.90625, false)),
    glyph("R", true, "default", 12.0, "regular", Metrics::new(8.337890625, 8.75, 6.828125, 1.171875, 8.0, 0.0, 8.75, 8.75, false)),
    glyph("S", true, "default", 12.0, "regular", Metrics::new(7.6171875, 9.078125, 6.15625, 0.796875, 6.953125, -0.171875, 8.90625, 8.90625, false)),
    glyph("T", true, "default", 12.0, "regular", Metrics::new(7.330078125, 8.75, 7.390625, -0.03125, 7.359375, 0.0, 8.75, 8.75, false)),
    glyph("U", true, "default", 12.0, "regular", Metrics::new(8.783203125, 8.921875, 6.6875, 1.046875, 7.734375, -0.171875, 8.75, 8.75, false)),
    glyph("V", true, "default", 12.0, "regular", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("W", true, "default", 12.0, "regular", Metrics::new(11.865234375, 8.75, 11.0625, 0.40625, 11.46875, 0.0, 8.75, 8.75, false)),
    glyph("X", true, "default", 12.0, "regular", Metrics::new(8.220703125, 8.75, 7.484375, 0.359375, 7.84375, 0.0, 8.75, 8.75, false)),
    glyph("Y", true, "default", 12.0, "regular", Metrics::new(7.330078125, 8.75, 7.375, -0.015625, 7.359375, 0.0, 8.75, 8.75, false)),
    glyph("Z", true, "default", 12.0, "regular", Metrics::new(8.220703125, 8.75, 7.140625, 0.546875, 7.6875, 0.0, 8.75, 8.75, false)),
    glyph("\\alpha", true, "default", 12.0, "regular", Metrics::new(7.91015625, 6.84375, 6.6875, 0.65625, 7.34375, -0.140625, 6.703125, 6.703125, false)),
    glyph("\\beta", true, "default", 12.0, "regular", Metrics::new(7.658203125, 11.6875, 5.671875, 1.125, 6.796875, -2.5, 9.1875, 9.1875, false)),
    glyph("\\gamma", true, "default", 12.0, "regular", Metrics::new(7.1015625, 9.0625, 6.5625, 0.1875, 6.75, -2.5, 6.5625, 6.5625, false)),
    glyph("\\delta", true, "default", 12.0, "regular", Metrics::new(7.341796875, 9.078125, 6.03125, 0.65625, 6.6875, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\epsilon", true, "default", 12.0, "regular", Metrics::new(7.3828125, 6.890625, 5.109375, 0.65625, 5.765625, -0.171875, 6.71875, 6.71875, false)),
    glyph("\\varepsilon", true, "default", 12.0, "regular", Metrics::new(6.486328125, 6.90625, 4.890625, 0.78125, 5.671875, -0.171875, 6.734375, 6.734375, false)),
    glyph("\\zeta", true, "default", 12.0, "regular", Metrics::new(6.52734375, 11.640625, 5.328125, 0.625, 5.953125, -2.515625, 9.125, 9.125, false)),
    glyph("\\eta", true, "default", 12.0, "regular", Metrics::new(7.60546875, 9.21875, 5.5, 1.09375, 6.59375, -2.5, 6.71875, 6.71875, false)),
    glyph("\\theta", true, "default", 12.0, "regular", Metrics::new(7.341796875, 9.359375, 6.03125, 0.65625, 6.6875, -0.140625, 9.21875, 9.21875, false)),
    glyph("\\vartheta", true, "default", 12.0, "regular", Metrics::new(7.4296875, 9.359375, 6.03125, 0.65625, 6.6875, -0.140625, 9.21875, 9.21875, false)),
    glyph("\\iota", true, "default", 12.0, "regular", Metrics::new(4.060546875, 6.5625, 2.671875, 0.96875, 3.640625, 0.0, 6.5625, 6.5625, false)),
    glyph("\\kappa", true, "default", 12.0, "regular", Metrics::new(7.072265625, 6.5625, 5.65625, 1.125, 6.78125, 0.0, 6.5625, 6.5625, false)),
    glyph("\\lambda", true, "default", 12.0, "regular", Metrics::new(7.1015625, 9.125, 6.390625, 0.359375, 6.75, 0.0, 9.125, 9.125, false)),
    glyph("\\mu", true, "default", 12.0, "regular", Metrics::new(7.634765625, 9.0625, 6.328125, 1.015625, 7.34375, -2.5, 6.5625, 6.5625, false)),
    glyph("\\nu", true, "default", 12.0, "regular", Metrics::new(6.703125, 6.5625, 5.703125, 0.4375, 6.140625, 0.0, 6.5625, 6.5625, false)),
    glyph("\\xi", true, "default", 12.0, "regular", Metrics::new(6.69140625, 11.640625, 5.375, 0.625, 6.0, -2.515625, 9.125, 9.125, false)),
    glyph("\\pi", true, "default", 12.0, "regular", Metrics::new(7.224609375, 6.796875, 6.453125, 0.4375, 6.890625, -0.234375, 6.5625, 6.5625, false)),
    glyph("\\varpi", true, "default", 12.0, "regular", Metrics::new(10.048828125, 6.734375, 9.265625, 0.375, 9.640625, -0.171875, 6.5625, 6.5625, false)),
    glyph("\\rho", true, "default", 12.0, "regular", Metrics::new(7.6171875, 9.21875, 5.875, 1.09375, 6.96875, -2.5, 6.71875, 6.71875, false)),
    glyph("\\varrho", true, "default", 12.0, "regular", Metrics::new(7.6171875, 9.21875, 5.875, 1.09375, 6.96875, -2.5, 6.71875, 6.71875, false)),
    glyph("\\sigma", true, "default", 12.0, "regular", Metrics::new(7.60546875, 6.734375, 6.59375, 0.65625, 7.25, -0.171875, 6.5625, 6.5625, false)),
    glyph("\\varsigma", true, "default", 12.0, "regular", Metrics::new(7.04296875, 9.234375, 5.203125, 0.65625, 5.859375, -2.515625, 6.71875, 6.71875, false)),
    glyph("\\tau", true, "default", 12.0, "regular", Metrics::new(7.224609375, 6.5625, 6.046875, 0.59375, 6.640625, 0.0, 6.5625, 6.5625, false)),
    glyph("\\upsilon", true, "default", 12.0, "regular", Metrics::new(6.943359375, 6.734375, 5.375, 0.875, 6.25, -0.171875, 6.5625, 6.5625, false)),
    glyph("\\phi", true, "default", 12.0, "regular", Metrics::new(7.916015625, 11.625, 6.5625, 0.65625, 7.21875, -2.5, 9.125, 9.125, false)),
    glyph("\\varphi", true, "default", 12.0, "regular", Metrics::new(7.916015625, 9.109375, 6.5625, 0.65625, 7.21875, -2.5, 6.609375, 6.609375, false)),
    glyph("\\chi", true, "default", 12.0, "regular", Metrics::new(6.931640625, 9.0625, 6.25, 0.34375, 6.59375, -2.5, 6.5625, 6.5625, false)),
    glyph("\\psi", true, "default", 12.0, "regular", Metrics::new(7.916015625, 9.0625, 6.5625, 0.65625, 7.21875, -2.5, 6.5625, 6.5625, false)),
    glyph("\\omega", true, "default", 12.0, "regular", Metrics::new(10.048828125, 6.734375, 8.4375, 0.796875, 9.234375, -0.171875, 6.5625, 6.5625, false)),
    glyph("\\Gamma", true, "default", 12.0, "regular", Metrics::new(6.685546875, 8.75, 5.453125, 1.171875, 6.625, 0.0, 8.75, 8.75, false)),
    glyph("\\Delta", true, "default", 12.0, "regular", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("\\Theta", true, "default", 12.0, "regular", Metrics::new(9.4453125, 9.078125, 8.09375, 0.671875, 8.765625, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\Lambda", true, "default", 12.0, "regular", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("\\Xi", true, "default", 12.0, "regular", Metrics::new(7.58203125, 8.75, 5.40625, 1.171875, 6.578125, 0.0, 8.75, 8.75, false)),
    glyph("\\Pi", true, "default", 12.0, "regular", Metrics::new(9.0234375, 8.75, 6.671875, 1.171875, 7.84375, 0.0, 8.75, 8.75, false)),
    glyph("\\Sigma", true, "default", 12.0, "regular", Metrics::new(7.58203125, 8.75, 5.640625, 1.171875, 6.8125, 0.0, 8.75, 8.75, false)),
    glyph("\\Upsilon", true, "default", 12.0, "regular", Metrics::new(7.330078125, 8.75, 7.375, -0.015625, 7.359375, 0.0, 8.75, 8.75, false)),
    glyph("\\Phi", true, "default", 12.0, "regular", Metrics::new(9.4453125, 8.75, 8.09375, 0.671875, 8.765625, 0.0, 8.75, 8.75, false)),
    glyph("\\Psi", true, "default", 12.0, "regular", Metrics::new(9.4453125, 8.75, 8.109375, 0.671875, 8.78125, 0.0, 8.75, 8.75, false)),
    glyph("\\Omega", true, "default", 12.0, "regular", Metrics::new(9.169921875, 8.859375, 8.265625, 0.453125, 8.71875, 0.0, 8.859375, 8.859375, false)),
    glyph("\\sum", true, "default", 12.0, "regular", Metrics::new(8.0859375, 10.921875, 7.703125, 0.140625, 7.84375, -2.296875, 8.625, 8.625, false)),
    glyph("\\prod", true, "default", 12.0, "regular", Metrics::new(9.08203125, 10.921875, 7.234375, 0.921875, 8.15625, -2.296875, 8.625, 8.625, false)),
    glyph("\\coprod", true, "default", 12.0, "regular", Metrics::new(9.08203125, 10.921875, 7.234375, 0.921875, 8.15625, -2.296875, 8.625, 8.625, false)),
    glyph("\\int", true, "default", 12.0, "regular", Metrics::new(6.251953125, 11.625, 4.875, 0.6875, 5.5625, -2.546875, 9.078125, 9.078125, true)),
    glyph("\\oint", true, "default", 12.0, "regular", Metrics::new(6.251953125, 11.625, 4.875, 0.6875, 5.5625, -2.546875, 9.078125, 9.078125, true)),
    glyph("\\iint", true, "default", 12.0, "regular", Metrics::new(9.46875, 11.625, 8.09375, 0.6875, 8.78125, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\iiint", true, "default", 12.0, "regular", Metrics::new(12.685546875, 11.625, 11.3125, 0.6875, 12.0, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\bigcap", true, "default", 12.0, "regular", Metrics::new(9.84375, 10.921875, 8.203125, 0.828125, 9.03125, -2.296875, 8.625, 8.625, false)),
    glyph("\\bigcup", true, "default", 12.0, "regular", Metrics::new(9.84375, 10.921875, 8.203125, 0.828125, 9.03125, -2.296875, 8.625, 8.625, false)),
    glyph("\\bigvee", true, "default", 12.0, "regular", Metrics::new(9.84375, 10.921875, 9.90625, -0.03125, 9.875, -2.296875, 8.625, 8.625, false)),
    glyph("\\bigwedge", true, "default", 12.0, "regular", Metrics::new(9.84375, 10.921875, 9.90625, -0.03125, 9.875, -2.296875, 8.625, 8.625, false)),
    glyph("\\bigoplus", true, "default", 12.0, "regular", Metrics::new(12.0, 11.34375, 11.3125, 0.34375, 11.65625, -2.375, 8.96875, 8.96875, false)),
    glyph("\\bigotimes", true, "default", 12.0, "regular", Metrics::new(12.0, 11.34375, 11.3125, 0.34375, 11.65625, -2.375, 8.96875, 8.96875, false)),
    glyph("\\pm", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.53125, 7.515625, 1.265625, 8.78125, 0.0, 7.53125, 7.53125, false)),
    glyph("\\mp", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.53125, 7.515625, 1.265625, 8.78125, 0.0, 7.53125, 7.53125, false)),
    glyph("\\times", true, "default", 12.0, "regular", Metrics::new(10.0546875, 6.78125, 6.78125, 1.640625, 8.421875, 0.375, 7.15625, 7.15625, false)),
    glyph("\\div", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.78125, 7.515625, 1.265625, 8.78125, 0.875, 6.65625, 6.65625, false)),
    glyph("\\cdot", true, "default", 12.0, "regular", Metrics::new(3.814453125, 1.484375, 1.234375, 1.28125, 2.515625, 3.421875, 4.90625, 4.90625, false)),
    glyph("\\ast", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.53125, 7.0, 1.53125, 8.53125, 0.0, 7.53125, 7.53125, false)),
    glyph("\\star", true, "default", 12.0, "regular", Metrics::new(7.51171875, 4.359375, 4.59375, 1.453125, 6.046875, 1.78125, 6.140625, 6.140625, false)),
    glyph("\\circ", true, "default", 12.0, "regular", Metrics::new(7.51171875, 3.71875, 3.703125, 1.90625, 5.609375, 1.921875, 5.640625, 5.640625, false)),
    glyph("\\bullet", true, "default", 12.0, "regular", Metrics::new(7.51171875, 3.46875, 3.484375, 2.015625, 5.5, 2.015625, 5.484375, 5.484375, false)),
    glyph("\\cap", true, "default", 12.0, "regular", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\cup", true, "default", 12.0, "regular", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\uplus", true, "default", 12.0, "regular", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.03125, 6.984375, 6.984375, false)),
    glyph("\\sqcap", true, "default", 12.0, "regular", Metrics::new(9.36328125, 7.515625, 6.828125, 1.265625, 8.09375, 0.0, 7.515625, 7.515625, false)),
    glyph("\\sqcup", true, "default", 12.0, "regular", Metrics::new(9.36328125, 7.515625, 6.828125, 1.265625, 8.09375, 0.0, 7.515625, 7.515625, false)),
    glyph("\\vee", true, "default", 12.0, "regular", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\wedge", true, "default", 12.0, "regular", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\setminus", true, "default", 12.0, "regular", Metrics::new(7.640625, 9.859375, 4.046875, 2.3125, 6.359375, -0.640625, 9.21875, 9.21875, false)),
    glyph("\\wr", true, "default", 12.0, "regular", Metrics::new(4.5, 7.515625, 2.0625, 1.21875, 3.28125, 0.0, 7.515625, 7.515625, false)),
    glyph("\\diamond", true, "default", 12.0, "regular", Metrics::new(7.51171875, 5.984375, 5.984375, 0.765625, 6.75, 0.765625, 6.75, 6.75, false)),
    glyph("\\oplus", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\ominus", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\otimes", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\oslash", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\odot", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\bigcirc", true, "default", 12.0, "regular", Metrics::new(10.470703125, 9.234375, 9.15625, 0.65625, 9.8125, -1.5, 7.734375, 7.734375, false)),
    glyph("\\dagger", true, "default", 12.0, "regular", Metrics::new(6.0, 9.90625, 5.34375, 0.328125, 5.671875, -1.15625, 8.75, 8.75, false)),
    glyph("\\ddagger", true, "default", 12.0, "regular", Metrics::new(6.0, 9.90625, 5.34375, 0.328125, 5.671875, -1.15625, 8.75, 8.75, false)),
    glyph("\\leq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 6.984375, 7.515625, 1.265625, 8.78125, 0.0, 6.984375, 6.984375, false)),
    glyph("\\geq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 6.984375, 7.515625, 1.265625, 8.78125, 0.0, 6.984375, 6.984375, false)),
    glyph("\\neq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.0625, 7.515625, 1.265625, 8.78125, 0.234375, 7.296875, 7.296875, false)),
    glyph("\\equiv", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.375, 7.515625, 1.265625, 8.78125, 1.078125, 6.453125, 6.453125, false)),
    glyph("\\sim", true, "default", 12.0, "regular", Metrics::new(10.0546875, 2.0625, 7.515625, 1.265625, 8.78125, 2.734375, 4.796875, 4.796875, false)),
    glyph("\\simeq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 3.875, 7.515625, 1.265625, 8.78125, 2.0625, 5.9375, 5.9375, false)),
    glyph("\\approx", true, "default", 12.0, "regular", Metrics::new(10.0546875, 4.34375, 7.515625, 1.265625, 8.78125, 1.59375, 5.9375, 5.9375, false)),
    glyph("\\cong", true, "default", 12.0, "regular", Metrics::new(10.0546875, 6.046875, 7.515625, 1.265625, 8.78125, 1.078125, 7.125, 7.125, false)),
    glyph("\\propto", true, "default", 12.0, "regular", Metrics::new(8.572265625, 4.5, 5.984375, 1.296875, 7.28125, 1.34375, 5.84375, 5.84375, false)),
    glyph("\\subset", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.609375, 7.65625, 1.203125, 8.859375, 0.953125, 6.5625, 6.5625, false)),
    glyph("\\supset", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.609375, 7.65625, 1.203125, 8.859375, 0.953125, 6.5625, 6.5625, false)),
    glyph("\\subseteq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.359375, 7.671875, 1.109375, 8.78125, 0.0, 7.359375, 7.359375, false)),
    glyph("\\supseteq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.359375, 7.671875, 1.265625, 8.9375, 0.0, 7.359375, 7.359375, false)),
    glyph("\\in", true, "default", 12.0, "regular", Metrics::new(10.453125, 8.625, 8.390625, 1.03125, 9.421875, -0.109375, 8.515625, 8.515625, false)),
    glyph("\\ni", true, "default", 12.0, "regular", Metrics::new(10.453125, 8.625, 8.390625, 1.03125, 9.421875, -0.109375, 8.515625, 8.515625, false)),
    glyph("\\notin", true, "default", 12.0, "regular", Metrics::new(10.453125, 11.6875, 8.390625, 1.03125, 9.421875, -1.65625, 10.03125, 10.03125, false)),
    glyph("\\ll", true, "default", 12.0, "regular", Metrics::new(12.5625, 7.046875, 10.828125, 0.875, 11.703125, 0.265625, 7.3125, 7.3125, false)),
    glyph("\\gg", true, "default", 12.0, "regular", Metrics::new(12.5625, 7.046875, 10.828125, 0.875, 11.703125, 0.265625, 7.3125, 7.3125, false)),
    glyph("\\prec", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.421875, 7.515625, 1.265625, 8.78125, -0.453125, 7.96875, 7.96875, false)),
    glyph("\\succ", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.421875, 7.515625, 1.265625, 8.78125, -0.453125, 7.96875, 7.96875, false)),
    glyph("\\mid", true, "default", 12.0, "regular", Metrics::new(6.0, 11.8125, 0.9375, 2.53125, 3.46875, -2.5625, 9.25, 9.25, false)),
    glyph("\\parallel", true, "default", 12.0, "regular", Metrics::new(6.0, 11.8125, 2.8125, 1.59375, 4.40625, -2.5625, 9.25, 9.25, false)),
    glyph("\\vdash", true, "default", 12.0, "regular", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\dashv", true, "default", 12.0, "regular", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\models", true, "default", 12.0, "regular", Metrics::new(6.24609375, 8.40625, 4.203125, 1.03125, 5.234375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\asymp", true, "default", 12.0, "regular", Metrics::new(10.0546875, 4.984375, 7.515625, 1.265625, 8.78125, 1.265625, 6.25, 6.25, false)),
    glyph("\\doteq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.4375, 7.515625, 1.265625, 8.78125, 2.0625, 7.5, 7.5, false)),
    glyph("\\bowtie", true, "default", 12.0, "regular", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\leftarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\rightarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\uparrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.796875, 5.140625, 2.453125, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\downarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.796875, 5.140625, 2.453125, 7.59375, -0.046875, 8.75, 8.75, false)),
    glyph("\\leftrightarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.875, 0.59375, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\updownarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.890625, 5.140625, 2.453125, 7.59375, -0.09375, 8.796875, 8.796875, false)),
    glyph("\\Leftarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Rightarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Uparrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.796875, 5.125, 2.46875, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\Downarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.796875, 5.125, 2.46875, 7.59375, -0.046875, 8.75, 8.75, false)),
    glyph("\\Leftrightarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.875, 0.59375, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Updownarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.890625, 5.125, 2.46875, 7.59375, -0.09375, 8.796875, 8.796875, false)),
    glyph("\\mapsto", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\longleftarrow", true, "default", 12.0, "regular", Metrics::new(17.203125, 5.125, 15.921875, 0.59375, 16.515625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\longrightarrow", true, "default", 12.0, "regular", Metrics::new(17.203125, 5.125, 15.9375, 0.6875, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\hookleftarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.578125, 8.765625, 0.59375, 9.359375, 1.203125, 6.78125, 6.78125, false)),
    glyph("\\hookrightarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.578125, 8.78125, 0.6875, 9.46875, 1.203125, 6.78125, 6.78125, false)),
    glyph("\\nearrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 6.734375, 6.75, 1.6875, 8.4375, 0.3125, 7.046875, 7.046875, false)),
    glyph("\\searrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 6.734375, 6.75, 1.6875, 8.4375, 0.3125, 7.046875, 7.046875, false)),
    glyph("\\swarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 6.734375, 6.75, 1.6875, 8.4375, 0.3125, 7.046875, 7.046875, false)),
    glyph("\\nwarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 6.734375, 6.75, 1.6875, 8.4375, 0.3125, 7.046875, 7.046875, false)),
    glyph("\\leftharpoonup", true, "default", 12.0, "regular", Metrics::new(10.0546875, 3.0625, 8.78125, 0.59375, 9.375, 3.265625, 6.328125, 6.328125, false)),
    glyph("\\rightharpoonup", true, "default", 12.0, "regular", Metrics::new(10.0546875, 3.0625, 8.78125, 0.6875, 9.46875, 3.265625, 6.328125, 6.328125, false)),
    glyph("\\rightleftharpoons", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.359375, 8.875, 0.59375, 9.46875, 0.078125, 7.4375, 7.4375, false)),
    glyph("\\infty", true, "default", 12.0, "regular", Metrics::new(9.99609375, 4.5, 7.40625, 1.296875, 8.703125, 1.34375, 5.84375, 5.84375, false)),
    glyph("\\partial", true, "default", 12.0, "regular", Metrics::new(6.205078125, 8.125, 5.09375, 0.5625, 5.65625, -0.171875, 7.953125, 7.953125, false)),
    glyph("\\nabla", true, "default", 12.0, "regular", Metrics::new(8.02734375, 8.625, 8.09375, -0.03125, 8.0625, 0.0, 8.625, 8.625, false)),
    glyph("\\forall", true, "default", 12.0, "regular", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("\\exists", true, "default", 12.0, "regular", Metrics::new(7.58203125, 8.75, 5.640625, 1.171875, 6.8125, 0.0, 8.75, 8.75, false)),
    glyph("\\neg", true, "default", 12.0, "regular", Metrics::new(10.0546875, 3.359375, 7.515625, 1.265625, 8.78125, 1.6875, 5.046875, 5.046875, false)),
    glyph("\\emptyset", true, "default", 12.0, "regular", Metrics::new(10.453125, 8.625, 8.640625, 0.90625, 9.546875, -0.109375, 8.515625, 8.515625, false)),
    glyph("\\aleph", true, "default", 12.0, "regular", Metrics::new(8.94140625, 9.078125, 7.9375, 0.609375, 8.546875, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\hbar", true, "default", 12.0, "regular", Metrics::new(8.337890625, 9.125, 6.234375, 0.703125, 6.9375, 0.0, 9.125, 9.125, false)),
    glyph("\\ell", true, "default", 12.0, "regular", Metrics::new(4.95703125, 9.078125, 4.390625, -0.15625, 4.234375, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\wp", true, "default", 12.0, "regular", Metrics::new(8.3671875, 8.59375, 7.25, 0.640625, 7.890625, -2.65625, 5.9375, 5.9375, false)),
    glyph("\\Re", true, "default", 12.0, "regular", Metrics::new(9.767578125, 9.078125, 9.15625, 0.484375, 9.640625, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\Im", true, "default", 12.0, "regular", Metrics::new(8.3671875, 9.078125, 7.28125, 0.625, 7.90625, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\prime", true, "default", 12.0, "regular", Metrics::new(2.724609375, 2.1875, 2.203125, 0.234375, 2.4375, 6.5625, 8.75, 8.75, false)),
    glyph("\\angle", true, "default", 12.0, "regular", Metrics::new(10.7578125, 8.75, 8.390625, 1.03125, 9.421875, 0.0, 8.75, 8.75, false)),
    glyph("\\triangle", true, "default", 12.0, "regular", Metrics::new(9.228515625, 9.1875, 9.15625, 0.03125, 9.1875, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\surd", true, "default", 12.0, "regular", Metrics::new(7.646484375, 9.96875, 7.28125, 0.359375, 7.640625, -0.234375, 9.734375, 9.734375, false)),
    glyph("\\top", true, "default", 12.0, "regular", Metrics::new(10.453125, 8.40625, 8.390625, 1.03125, 9.421875, 0.0, 8.40625, 8.40625, false)),
    glyph("\\bot", true, "default", 12.0, "regular", Metrics::new(10.453125, 8.40625, 8.390625, 1.03125, 9.421875, 0.0, 8.40625, 8.40625, false)),
    glyph("\\flat", true, "default", 12.0, "regular", Metrics::new(5.66015625, 8.796875, 3.640625, 1.0625, 4.703125, -0.03125, 8.765625, 8.765625, false)),
    glyph("\\natural", true, "default", 12.0, "regular", Metrics::new(4.2890625, 8.765625, 2.265625, 1.015625, 3.28125, 0.0, 8.765625, 8.765625, false)),
    glyph("\\sharp", true, "default", 12.0, "regular", Metrics::new(5.806640625, 8.765625, 3.796875, 1.015625, 4.8125, 0.0, 8.765625, 8.765625, false)),
    glyph("\\clubsuit", true, "default", 12.0, "regular", Metrics::new(10.7578125, 8.75, 8.078125, 1.34375, 9.421875, 0.0, 8.75, 8.75, false)),
    glyph("\\diamondsuit", true, "default", 12.0, "regular", Metrics::new(10.7578125, 8.75, 6.71875, 2.015625, 8.734375, 0.0, 8.75, 8.75, false)),
    glyph("\\heartsuit", true, "default", 12.0, "regular", Metrics::new(10.7578125, 8.71875, 8.59375, 1.078125, 9.671875, 0.0, 8.71875, 8.71875, false)),
    glyph("\\spadesuit", true, "default", 12.0, "regular", Metrics::new(10.7578125, 8.75, 6.96875, 1.890625, 8.859375, 0.0, 8.75, 8.75, false)),
    glyph("\\ldots", true, "default", 12.0, "regular", Metrics::new(12.0, 1.484375, 9.234375, 1.390625, 10.625, 0.0, 1.484375, 1.484375, false)),
    glyph("\\cdots", true, "default", 12.0, "regular", Metrics::new(12.0, 1.5, 9.21875, 1.390625, 10.609375, 2.984375, 4.484375, 4.484375, false)),
    glyph("\\vdots", true, "default", 12.0, "regular", Metrics::new(12.0, 9.6875, 1.234375, 5.375, 6.609375, -1.109375, 8.578125, 8.578125, false)),
    glyph("\\ddots", true, "default", 12.0, "regular", Metrics::new(12.0, 9.6875, 9.21875, 1.390625, 10.609375, -1.109375, 8.578125, 8.578125, false)),
    glyph("\\langle", true, "default", 12.0, "regular", Metrics::new(4.681640625, 10.6875, 2.640625, 1.078125, 3.71875, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\rangle", true, "default", 12.0, "regular", Metrics::new(4.681640625, 10.6875, 2.640625, 0.96875, 3.609375, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\lfloor", true, "default", 12.0, "regular", Metrics::new(4.681640625, 10.703125, 2.484375, 1.03125, 3.515625, -1.578125, 9.125, 9.125, false)),
    glyph("\\rfloor", true, "default", 12.0, "regular", Metrics::new(4.681640625, 10.703125, 2.484375, 1.171875, 3.65625, -1.578125, 9.125, 9.125, false)),
    glyph("\\lceil", true, "default", 12.0, "regular", Metrics::new(4.681640625, 10.703125, 2.484375, 1.03125, 3.515625, -1.578125, 9.125, 9.125, false)),
    glyph("\\rceil", true, "default", 12.0, "regular", Metrics::new(4.681640625, 10.703125, 2.484375, 1.171875, 3.65625, -1.578125, 9.125, 9.125, false)),
    glyph("\\lbrace", true, "default", 12.0, "regular", Metrics::new(7.634765625, 11.078125, 4.640625, 1.5, 6.140625, -1.953125, 9.125, 9.125, false)),
    glyph("\\rbrace", true, "default", 12.0, "regular", Metrics::new(7.634765625, 11.078125, 4.640625, 1.5, 6.140625, -1.953125, 9.125, 9.125, false)),
    glyph("\\vert", true, "default", 12.0, "regular", Metrics::new(4.04296875, 12.0, 0.984375, 1.53125, 2.515625, -2.828125, 9.171875, 9.171875, false)),
    glyph("\\Vert", true, "default", 12.0, "regular", Metrics::new(6.0, 12.0, 2.921875, 1.53125, 4.453125, -2.828125, 9.171875, 9.171875, false)),
    glyph("\\backslash", true, "default", 12.0, "regular", Metrics::new(4.04296875, 9.859375, 4.046875, 0.0, 4.046875, -1.109375, 8.75, 8.75, false)),
    glyph("\\S", true, "default", 12.0, "regular", Metrics::new(6.0, 10.046875, 4.90625, 0.546875, 5.453125, -1.140625, 8.90625, 8.90625, false)),
    glyph("\\P", true, "default", 12.0, "regular", Metrics::new(7.634765625, 9.90625, 5.40625, 0.921875, 6.328125, -1.15625, 8.75, 8.75, false)),
    glyph("\\copyright", true, "default", 12.0, "regular", Metrics::new(12.0, 8.703125, 8.6875, 1.65625, 10.34375, 0.0, 8.703125, 8.703125, false)),
    glyph("\\degree", true, "default", 12.0, "regular", Metrics::new(6.0, 3.71875, 3.71875, 1.140625, 4.859375, 5.1875, 8.90625, 8.90625, false)),
    glyph("\\imath", true, "default", 12.0, "regular", Metrics::new(3.333984375, 6.71875, 1.078125, 1.125, 2.203125, 0.0, 6.71875, 6.71875, false)),
    glyph("\\jmath", true, "default", 12.0, "regular", Metrics::new(3.333984375, 9.0625, 2.421875, -0.21875, 2.203125, -2.5, 6.5625, 6.5625, false)),
    glyph("\\nleftarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\nrightarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\twoheadleftarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\twoheadrightarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\leftarrowtail", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\rightarrowtail", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\mapsfrom", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\mapsup", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.796875, 5.125, 2.46875, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\mapsdown", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.796875, 5.125, 2.46875, 7.59375, -0.046875, 8.75, 8.75, false)),
    glyph("\\looparrowleft", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.578125, 8.765625, 0.59375, 9.359375, 1.203125, 6.78125, 6.78125, false)),
    glyph("\\looparrowright", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.578125, 8.78125, 0.6875, 9.46875, 1.203125, 6.78125, 6.78125, false)),
    glyph("\\leftrightsquigarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.875, 0.59375, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\nleftrightarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.296875, 8.875, 0.59375, 9.46875, 1.109375, 6.40625, 6.40625, false)),
    glyph("\\Lsh", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.921875, 5.515625, 2.03125, 7.546875, 0.0, 8.921875, 8.921875, false)),
    glyph("\\Rsh", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.921875, 5.515625, 2.515625, 8.03125, 0.0, 8.921875, 8.921875, false)),
    glyph("\\curvearrowleft", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.578125, 9.328125, 0.265625, 9.59375, 2.4375, 8.015625, 8.015625, false)),
    glyph("\\curvearrowright", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.578125, 9.328125, 0.46875, 9.796875, 2.4375, 8.015625, 8.015625, false)),
    glyph("\\circlearrowleft", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.40625, 7.90625, 1.234375, 9.140625, 0.75, 8.15625, 8.15625, false)),
    glyph("\\circlearrowright", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.40625, 7.90625, 0.921875, 8.828125, 0.75, 8.15625, 8.15625, false)),
    glyph("\\leftharpoondown", true, "default", 12.0, "regular", Metrics::new(10.0546875, 3.0625, 8.78125, 0.59375, 9.375, 1.203125, 4.265625, 4.265625, false)),
    glyph("\\upharpoonright", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.796875, 3.0625, 4.53125, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\upharpoonleft", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.796875, 3.078125, 2.453125, 5.53125, 0.0, 8.796875, 8.796875, false)),
    glyph("\\rightharpoondown", true, "default", 12.0, "regular", Metrics::new(10.0546875, 3.0625, 8.78125, 0.6875, 9.46875, 1.203125, 4.265625, 4.265625, false)),
    glyph("\\downharpoonright", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.796875, 3.0625, 4.53125, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\downharpoonleft", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.796875, 3.078125, 2.453125, 5.53125, 0.0, 8.796875, 8.796875, false)),
    glyph("\\rightleftarrows", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.65625, 8.875, 0.59375, 9.46875, -0.5625, 8.09375, 8.09375, false)),
    glyph("\\leftrightarrows", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.65625, 8.875, 0.59375, 9.46875, -0.5625, 8.09375, 8.09375, false)),
    glyph("\\leftleftarrows", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.65625, 8.78125, 0.59375, 9.375, -0.5625, 8.09375, 8.09375, false)),
    glyph("\\upuparrows", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.796875, 8.65625, 0.703125, 9.359375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\rightrightarrows", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.65625, 8.78125, 0.6875, 9.46875, -0.5625, 8.09375, 8.09375, false)),
    glyph("\\downdownarrows", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.796875, 8.65625, 0.703125, 9.359375, -0.046875, 8.75, 8.75, false)),
    glyph("\\leftrightharpoons", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.359375, 8.875, 0.59375, 9.46875, 0.078125, 7.4375, 7.4375, false)),
    glyph("\\nLeftarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\nLeftrightarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.265625, 8.875, 0.59375, 9.46875, 1.125, 6.390625, 6.390625, false)),
    glyph("\\nRightarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Lleftarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Rrightarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\leftsquigarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\rightsquigarrow", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\longleftrightarrow", true, "default", 12.0, "regular", Metrics::new(17.203125, 5.125, 16.03125, 0.59375, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Longleftarrow", true, "default", 12.0, "regular", Metrics::new(17.203125, 5.125, 15.921875, 0.59375, 16.515625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Longrightarrow", true, "default", 12.0, "regular", Metrics::new(17.203125, 5.125, 15.9375, 0.6875, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Longleftrightarrow", true, "default", 12.0, "regular", Metrics::new(17.203125, 5.125, 16.03125, 0.59375, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\longmapsto", true, "default", 12.0, "regular", Metrics::new(17.203125, 5.125, 15.9375, 0.6875, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\nmid", true, "default", 12.0, "regular", Metrics::new(6.0, 11.8125, 4.8125, 0.59375, 5.40625, -2.5625, 9.25, 9.25, false)),
    glyph("\\nparallel", true, "default", 12.0, "regular", Metrics::new(6.0, 11.8125, 4.8125, 0.59375, 5.40625, -2.5625, 9.25, 9.25, false)),
    glyph("\\backsim", true, "default", 12.0, "regular", Metrics::new(10.0546875, 2.0625, 7.515625, 1.265625, 8.78125, 2.734375, 4.796875, 4.796875, false)),
    glyph("\\nsim", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.71875, 7.515625, 1.265625, 8.78125, 0.921875, 6.640625, 6.640625, false)),
    glyph("\\eqsim", true, "default", 12.0, "regular", Metrics::new(10.0546875, 3.859375, 7.515625, 1.265625, 8.78125, 1.59375, 5.453125, 5.453125, false)),
    glyph("\\ncong", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.953125, 7.515625, 1.265625, 8.78125, -0.0625, 7.890625, 7.890625, false)),
    glyph("\\napprox", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.46875, 7.515625, 1.265625, 8.78125, 0.03125, 7.5, 7.5, false)),
    glyph("\\approxeq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 6.09375, 7.515625, 1.265625, 8.78125, 1.078125, 7.171875, 7.171875, false)),
    glyph("\\allequal", true, "default", 12.0, "regular", Metrics::new(10.0546875, 6.046875, 7.515625, 1.265625, 8.78125, 1.078125, 7.125, 7.125, false)),
    glyph("\\Bumpeq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 6.890625, 7.515625, 1.265625, 8.78125, 0.3125, 7.203125, 7.203125, false)),
    glyph("\\bumpeq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 5.140625, 7.515625, 1.265625, 8.78125, 2.0625, 7.203125, 7.203125, false)),
    glyph("\\Doteq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.484375, 7.515625, 1.265625, 8.78125, 0.015625, 7.5, 7.5, false)),
    glyph("\\fallingdotseq", true, "default", 12.0, "regular", Metrics::new(10.06640625, 7.46875, 7.53125, 1.265625, 8.796875, 0.03125, 7.5, 7.5, false)),
    glyph("\\risingdotseq", true, "default", 12.0, "regular", Metrics::new(10.06640625, 7.46875, 7.53125, 1.265625, 8.796875, 0.03125, 7.5, 7.5, false)),
    glyph("\\coloneq", true, "default", 12.0, "regular", Metrics::new(12.0, 3.90625, 9.578125, 1.21875, 10.796875, 1.8125, 5.71875, 5.71875, false)),
    glyph("\\eqcolon", true, "default", 12.0, "regular", Metrics::new(12.0, 3.890625, 9.59375, 1.203125, 10.796875, 1.8125, 5.703125, 5.703125, false)),
    glyph("\\eqcirc", true, "default", 12.0, "regular", Metrics::new(10.0546875, 3.390625, 7.515625, 1.265625, 8.78125, 2.0625, 5.453125, 5.453125, false)),
    glyph("\\circeq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.0625, 7.515625, 1.265625, 8.78125, 2.0625, 9.125, 9.125, false)),
    glyph("\\wedgeq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.6875, 7.515625, 1.265625, 8.78125, 2.0625, 9.75, 9.75, false)),
    glyph("\\veeeq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.6875, 7.515625, 1.265625, 8.78125, 2.0625, 9.75, 9.75, false)),
    glyph("\\stareq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.125, 7.515625, 1.265625, 8.78125, 2.0625, 10.1875, 10.1875, false)),
    glyph("\\triangleq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.1875, 7.515625, 1.265625, 8.78125, 2.0625, 10.25, 10.25, false)),
    glyph("\\nequiv", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.109375, 7.515625, 1.265625, 8.78125, -0.296875, 7.8125, 7.8125, false)),
    glyph("\\leqq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.65625, 7.515625, 1.28125, 8.796875, -1.0, 7.65625, 7.65625, false)),
    glyph("\\geqq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.65625, 7.515625, 1.28125, 8.796875, -1.0, 7.65625, 7.65625, false)),
    glyph("\\lneqq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 9.625, 7.515625, 1.28125, 8.796875, -1.96875, 7.65625, 7.65625, false)),
    glyph("\\gneqq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 9.625, 7.515625, 1.28125, 8.796875, -1.96875, 7.65625, 7.65625, false)),
    glyph("\\between", true, "default", 12.0, "regular", Metrics::new(5.56640625, 10.6875, 3.5, 1.03125, 4.53125, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\nless", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.0625, 7.515625, 1.265625, 8.78125, 0.03125, 8.09375, 8.09375, false)),
    glyph("\\ngtr", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.0625, 7.515625, 1.265625, 8.78125, -0.5625, 7.5, 7.5, false)),
    glyph("\\nleq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 9.21875, 7.515625, 1.265625, 8.78125, -1.21875, 8.0, 8.0, false)),
    glyph("\\ngeq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 9.21875, 7.515625, 1.265625, 8.78125, -1.21875, 8.0, 8.0, false)),
    glyph("\\lesssim", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.640625, 7.53125, 1.265625, 8.796875, -0.65625, 6.984375, 6.984375, false)),
    glyph("\\gtrsim", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.453125, 7.515625, 1.28125, 8.796875, -0.46875, 6.984375, 6.984375, false)),
    glyph("\\lessgtr", true, "default", 12.0, "regular", Metrics::new(10.0546875, 9.28125, 7.578125, 1.21875, 8.796875, -1.046875, 8.234375, 8.234375, false)),
    glyph("\\gtrless", true, "default", 12.0, "regular", Metrics::new(10.0546875, 9.28125, 7.578125, 1.21875, 8.796875, -1.046875, 8.234375, 8.234375, false)),
    glyph("\\preccurlyeq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 9.28125, 7.515625, 1.265625, 8.78125, -1.265625, 8.015625, 8.015625, false)),
    glyph("\\succcurlyeq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 9.28125, 7.515625, 1.265625, 8.78125, -1.265625, 8.015625, 8.015625, false)),
    glyph("\\precsim", true, "default", 12.0, "regular", Metrics::new(10.0546875, 9.03125, 7.515625, 1.265625, 8.78125, -1.015625, 8.015625, 8.015625, false)),
    glyph("\\succsim", true, "default", 12.0, "regular", Metrics::new(10.0546875, 9.03125, 7.515625, 1.265625, 8.78125, -1.015625, 8.015625, 8.015625, false)),
    glyph("\\nprec", true, "default", 12.0, "regular", Metrics::new(10.0546875, 9.90625, 7.515625, 1.265625, 8.78125, -0.734375, 9.171875, 9.171875, false)),
    glyph("\\nsucc", true, "default", 12.0, "regular", Metrics::new(10.0546875, 9.90625, 7.515625, 1.265625, 8.78125, -1.65625, 8.25, 8.25, false)),
    glyph("\\nsubset", true, "default", 12.0, "regular", Metrics::new(10.0546875, 9.875, 7.65625, 1.203125, 8.859375, -1.15625, 8.71875, 8.71875, false)),
    glyph("\\nsupset", true, "default", 12.0, "regular", Metrics::new(10.0546875, 9.875, 7.65625, 1.203125, 8.859375, -1.203125, 8.671875, 8.671875, false)),
    glyph("\\nsubseteq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 10.15625, 7.671875, 1.109375, 8.78125, -1.390625, 8.765625, 8.765625, false)),
    glyph("\\nsupseteq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 10.15625, 7.671875, 1.265625, 8.9375, -1.390625, 8.765625, 8.765625, false)),
    glyph("\\subsetneq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.234375, 7.671875, 1.109375, 8.78125, -0.875, 7.359375, 7.359375, false)),
    glyph("\\supsetneq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.234375, 7.671875, 1.109375, 8.78125, -0.875, 7.359375, 7.359375, false)),
    glyph("\\sqsubset", true, "default", 12.0, "regular", Metrics::new(10.0546875, 6.8125, 7.515625, 1.265625, 8.78125, 0.0, 6.8125, 6.8125, false)),
    glyph("\\sqsupset", true, "default", 12.0, "regular", Metrics::new(10.0546875, 6.8125, 7.515625, 1.265625, 8.78125, 0.0, 6.8125, 6.8125, false)),
    glyph("\\sqsubseteq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.5625, 7.515625, 1.265625, 8.78125, -1.0, 7.5625, 7.5625, false)),
    glyph("\\sqsupseteq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.5625, 7.515625, 1.265625, 8.78125, -1.0, 7.5625, 7.5625, false)),
    glyph("\\vDash", true, "default", 12.0, "regular", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\Vdash", true, "default", 12.0, "regular", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\Vvdash", true, "default", 12.0, "regular", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\VDash", true, "default", 12.0, "regular", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\nvdash", true, "default", 12.0, "regular", Metrics::new(10.453125, 9.34375, 8.40625, 1.03125, 9.4375, -0.46875, 8.875, 8.875, false)),
    glyph("\\nvDash", true, "default", 12.0, "regular", Metrics::new(10.453125, 9.34375, 8.40625, 1.03125, 9.4375, -0.46875, 8.875, 8.875, false)),
    glyph("\\nVdash", true, "default", 12.0, "regular", Metrics::new(10.453125, 9.34375, 8.40625, 1.03125, 9.4375, -0.46875, 8.875, 8.875, false)),
    glyph("\\nVDash", true, "default", 12.0, "regular", Metrics::new(10.453125, 9.34375, 8.40625, 1.03125, 9.4375, -0.46875, 8.875, 8.875, false)),
    glyph("\\vartriangleleft", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.171875, 7.515625, 1.265625, 8.78125, 0.171875, 7.34375, 7.34375, false)),
    glyph("\\vartriangleright", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.171875, 7.515625, 1.265625, 8.78125, 0.171875, 7.34375, 7.34375, false)),
    glyph("\\trianglelefteq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.671875, 7.515625, 1.265625, 8.78125, -0.578125, 8.09375, 8.09375, false)),
    glyph("\\trianglerighteq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.671875, 7.515625, 1.265625, 8.78125, -0.578125, 8.09375, 8.09375, false)),
    glyph("\\multimap", true, "default", 12.0, "regular", Metrics::new(10.0546875, 3.34375, 8.90625, 0.578125, 9.484375, 2.109375, 5.453125, 5.453125, false)),
    glyph("\\backsimeq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 3.875, 7.515625, 1.265625, 8.78125, 2.0625, 5.9375, 5.9375, false)),
    glyph("\\Subset", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.59375, 7.671875, 1.109375, 8.78125, -0.03125, 7.5625, 7.5625, false)),
    glyph("\\Supset", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.59375, 7.671875, 1.265625, 8.9375, -0.03125, 7.5625, 7.5625, false)),
    glyph("\\pitchfork", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.75, 5.59375, 2.234375, 7.828125, 0.0, 8.75, 8.75, false)),
    glyph("\\lessdot", true, "default", 12.0, "regular", Metrics::new(10.0546875, 6.421875, 7.515625, 1.265625, 8.78125, 0.546875, 6.96875, 6.96875, false)),
    glyph("\\gtrdot", true, "default", 12.0, "regular", Metrics::new(10.0546875, 6.421875, 7.515625, 1.265625, 8.78125, 0.546875, 6.96875, 6.96875, false)),
    glyph("\\lll", true, "default", 12.0, "regular", Metrics::new(17.068359375, 7.046875, 15.328125, 0.875, 16.203125, 0.265625, 7.3125, 7.3125, false)),
    glyph("\\ggg", true, "default", 12.0, "regular", Metrics::new(17.068359375, 7.046875, 15.328125, 0.875, 16.203125, 0.265625, 7.3125, 7.3125, false)),
    glyph("\\lesseqgtr", true, "default", 12.0, "regular", Metrics::new(10.0546875, 12.984375, 7.515625, 1.265625, 8.78125, -2.734375, 10.25, 10.25, false)),
    glyph("\\gtreqless", true, "default", 12.0, "regular", Metrics::new(10.0546875, 12.984375, 7.515625, 1.265625, 8.78125, -2.734375, 10.25, 10.25, false)),
    glyph("\\curlyeqprec", true, "default", 12.0, "regular", Metrics::new(10.0546875, 9.28125, 7.515625, 1.265625, 8.78125, -1.265625, 8.015625, 8.015625, false)),
    glyph("\\curlyeqsucc", true, "default", 12.0, "regular", Metrics::new(10.0546875, 9.28125, 7.515625, 1.265625, 8.78125, -1.265625, 8.015625, 8.015625, false)),
    glyph("\\npreccurlyeq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 11.3125, 7.515625, 1.265625, 8.78125, -2.140625, 9.171875, 9.171875, false)),
    glyph("\\nsucccurlyeq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 11.3125, 7.515625, 1.265625, 8.78125, -2.140625, 9.171875, 9.171875, false)),
    glyph("\\nsqsubseteq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 10.890625, 7.515625, 1.265625, 8.78125, -1.6875, 9.203125, 9.203125, false)),
    glyph("\\nsqsupseteq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 10.890625, 7.515625, 1.265625, 8.78125, -1.6875, 9.203125, 9.203125, false)),
    glyph("\\lnsim", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.640625, 7.53125, 1.265625, 8.796875, -1.65625, 6.984375, 6.984375, false)),
    glyph("\\gnsim", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.640625, 7.53125, 1.265625, 8.796875, -1.65625, 6.984375, 6.984375, false)),
    glyph("\\precnsim", true, "default", 12.0, "regular", Metrics::new(10.0546875, 10.046875, 7.515625, 1.265625, 8.78125, -2.03125, 8.015625, 8.015625, false)),
    glyph("\\succnsim", true, "default", 12.0, "regular", Metrics::new(10.0546875, 10.0625, 7.515625, 1.3125, 8.828125, -2.046875, 8.015625, 8.015625, false)),
    glyph("\\ntriangleleft", true, "default", 12.0, "regular", Metrics::new(10.0546875, 10.640625, 7.515625, 1.265625, 8.78125, -1.5625, 9.078125, 9.078125, false)),
    glyph("\\ntriangleright", true, "default", 12.0, "regular", Metrics::new(10.0546875, 10.640625, 7.515625, 1.265625, 8.78125, -1.5625, 9.078125, 9.078125, false)),
    glyph("\\ntrianglelefteq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 12.046875, 7.515625, 1.265625, 8.78125, -2.265625, 9.78125, 9.78125, false)),
    glyph("\\ntrianglerighteq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 12.046875, 7.515625, 1.25, 8.765625, -2.265625, 9.78125, 9.78125, false)),
    glyph("\\leqslant", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -1.46875, 6.96875, 6.96875, false)),
    glyph("\\geqslant", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -1.46875, 6.96875, 6.96875, false)),
    glyph("\\lessapprox", true, "default", 12.0, "regular", Metrics::new(10.0546875, 9.546875, 7.53125, 1.265625, 8.796875, -1.59375, 7.953125, 7.953125, false)),
    glyph("\\gtrapprox", true, "default", 12.0, "regular", Metrics::new(10.0546875, 9.546875, 7.53125, 1.265625, 8.796875, -1.59375, 7.953125, 7.953125, false)),
    glyph("\\lneq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -1.453125, 6.984375, 6.984375, false)),
    glyph("\\gneq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -1.453125, 6.984375, 6.984375, false)),
    glyph("\\lnapprox", true, "default", 12.0, "regular", Metrics::new(10.0546875, 10.390625, 7.53125, 1.265625, 8.796875, -2.4375, 7.953125, 7.953125, false)),
    glyph("\\gnapprox", true, "default", 12.0, "regular", Metrics::new(10.0546875, 10.390625, 7.53125, 1.265625, 8.796875, -2.4375, 7.953125, 7.953125, false)),
    glyph("\\lesseqqgtr", true, "default", 12.0, "regular", Metrics::new(10.0546875, 13.21875, 7.515625, 1.265625, 8.78125, -3.71875, 9.5, 9.5, false)),
    glyph("\\gtreqqless", true, "default", 12.0, "regular", Metrics::new(10.0546875, 13.21875, 7.515625, 1.265625, 8.78125, -3.71875, 9.5, 9.5, false)),
    glyph("\\eqslantless", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -0.71875, 7.71875, 7.71875, false)),
    glyph("\\eqslantgtr", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -0.71875, 7.71875, 7.71875, false)),
    glyph("\\preceq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.296875, 7.515625, 1.265625, 8.78125, -0.28125, 8.015625, 8.015625, false)),
    glyph("\\succeq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.296875, 7.515625, 1.265625, 8.78125, -0.28125, 8.015625, 8.015625, false)),
    glyph("\\precneqq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 10.28125, 7.515625, 1.265625, 8.78125, -2.34375, 7.9375, 7.9375, false)),
    glyph("\\succneqq", true, "default", 12.0, "regular", Metrics::new(10.0546875, 10.28125, 7.515625, 1.265625, 8.78125, -2.34375, 7.9375, 7.9375, false)),
    glyph("\\precapprox", true, "default", 12.0, "regular", Metrics::new(10.0546875, 10.609375, 7.515625, 1.265625, 8.78125, -2.296875, 8.3125, 8.3125, false)),
    glyph("\\succapprox", true, "default", 12.0, "regular", Metrics::new(10.0546875, 10.609375, 7.515625, 1.265625, 8.78125, -2.296875, 8.3125, 8.3125, false)),
    glyph("\\precnapprox", true, "default", 12.0, "regular", Metrics::new(10.0546875, 11.421875, 7.53125, 1.265625, 8.796875, -3.109375, 8.3125, 8.3125, false)),
    glyph("\\succnapprox", true, "default", 12.0, "regular", Metrics::new(10.0546875, 11.421875, 7.53125, 1.265625, 8.796875, -3.109375, 8.3125, 8.3125, false)),
    glyph("\\dotplus", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.75, 7.515625, 1.265625, 8.78125, 0.0, 8.75, 8.75, false)),
    glyph("\\smallsetminus", true, "default", 12.0, "regular", Metrics::new(7.640625, 9.859375, 4.046875, 2.3125, 6.359375, -0.640625, 9.21875, 9.21875, false)),
    glyph("\\dotminus", true, "default", 12.0, "regular", Metrics::new(10.0546875, 3.359375, 7.515625, 1.265625, 8.78125, 3.265625, 6.625, 6.625, false)),
    glyph("\\cupdot", true, "default", 12.0, "regular", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\circledcirc", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\circledast", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\circleddash", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\boxplus", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\boxminus", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\boxtimes", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\boxdot", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\intercal", true, "default", 12.0, "regular", Metrics::new(6.24609375, 8.40625, 3.46875, 1.390625, 4.859375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\veebar", true, "default", 12.0, "regular", Metrics::new(8.783203125, 8.890625, 6.4375, 1.171875, 7.609375, 0.0, 8.890625, 8.890625, false)),
    glyph("\\barwedge", true, "default", 12.0, "regular", Metrics::new(8.783203125, 8.890625, 6.4375, 1.171875, 7.609375, 0.0, 8.890625, 8.890625, false)),
    glyph("\\barvee", true, "default", 12.0, "regular", Metrics::new(8.783203125, 8.890625, 6.4375, 1.171875, 7.609375, 0.0, 8.890625, 8.890625, false)),
    glyph("\\divideontimes", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.1875, 7.515625, 1.265625, 8.78125, 0.171875, 7.359375, 7.359375, false)),
    glyph("\\ltimes", true, "default", 12.0, "regular", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\rtimes", true, "default", 12.0, "regular", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\leftthreetimes", true, "default", 12.0, "regular", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\rightthreetimes", true, "default", 12.0, "regular", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\curlyvee", true, "default", 12.0, "regular", Metrics::new(8.7890625, 6.953125, 7.625, 0.578125, 8.203125, 0.0, 6.953125, 6.953125, false)),
    glyph("\\curlywedge", true, "default", 12.0, "regular", Metrics::new(8.7890625, 6.953125, 7.625, 0.578125, 8.203125, 0.0, 6.953125, 6.953125, false)),
    glyph("\\Cap", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.953125, 7.59375, 1.234375, 8.828125, 0.0, 7.953125, 7.953125, false)),
    glyph("\\Cup", true, "default", 12.0, "regular", Metrics::new(10.0546875, 7.953125, 7.59375, 1.234375, 8.828125, -0.171875, 7.78125, 7.78125, false)),
    glyph("\\doublebarwedge", true, "default", 12.0, "regular", Metrics::new(10.0546875, 6.15625, 5.140625, 2.453125, 7.59375, 0.0, 6.15625, 6.15625, false)),
    glyph("\\bigodot", true, "default", 12.0, "regular", Metrics::new(12.0, 11.34375, 11.3125, 0.34375, 11.65625, -2.375, 8.96875, 8.96875, false)),
    glyph("\\oiint", true, "default", 12.0, "regular", Metrics::new(9.46875, 11.625, 8.09375, 0.6875, 8.78125, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\oiiint", true, "default", 12.0, "regular", Metrics::new(12.685546875, 11.625, 11.3125, 0.6875, 12.0, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\iiiint", true, "default", 12.0, "regular", Metrics::new(15.90234375, 11.625, 14.53125, 0.6875, 15.21875, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\minus", true, "default", 12.0, "regular", Metrics::new(10.0546875, 1.0, 7.515625, 1.265625, 8.78125, 3.265625, 4.265625, 4.265625, false)),
    glyph("\\cdotp", true, "default", 12.0, "regular", Metrics::new(3.814453125, 1.484375, 1.234375, 1.28125, 2.515625, 3.421875, 4.90625, 4.90625, false)),
    glyph("\\hslash", true, "default", 12.0, "regular", Metrics::new(7.60546875, 9.125, 6.53125, 0.53125, 7.0625, 0.0, 9.125, 9.125, false)),
    glyph("\\beth", true, "default", 12.0, "regular", Metrics::new(8.0859375, 9.078125, 7.859375, -0.03125, 7.828125, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\gimel", true, "default", 12.0, "regular", Metrics::new(5.58984375, 9.328125, 4.71875, 0.15625, 4.875, -0.421875, 8.90625, 8.90625, false)),
    glyph("\\daleth", true, "default", 12.0, "regular", Metrics::new(7.734375, 9.328125, 6.59375, 0.5, 7.09375, -0.421875, 8.90625, 8.90625, false)),
    glyph("\\mho", true, "default", 12.0, "regular", Metrics::new(9.169921875, 8.859375, 8.265625, 0.453125, 8.71875, -0.171875, 8.6875, 8.6875, false)),
    glyph("\\eth", true, "default", 12.0, "regular", Metrics::new(7.341796875, 9.296875, 6.03125, 0.65625, 6.6875, -0.171875, 9.125, 9.125, false)),
    glyph("\\Finv", true, "default", 12.0, "regular", Metrics::new(6.90234375, 8.75, 5.03125, 1.171875, 6.203125, 0.0, 8.75, 8.75, false)),
    glyph("\\Game", true, "default", 12.0, "regular", Metrics::new(9.298828125, 9.078125, 7.640625, 0.953125, 8.59375, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\digamma", true, "default", 12.0, "regular", Metrics::new(5.501953125, 11.625, 6.03125, -1.125, 4.90625, -2.5, 9.125, 9.125, false)),
    glyph("\\varkappa", true, "default", 12.0, "regular", Metrics::new(7.962890625, 6.6875, 6.546875, 0.65625, 7.203125, -0.078125, 6.609375, 6.609375, false)),
    glyph("\\backepsilon", true, "default", 12.0, "regular", Metrics::new(7.3828125, 6.890625, 5.09375, 1.15625, 6.25, -0.171875, 6.71875, 6.71875, false)),
    glyph("\\AA", true, "default", 12.0, "regular", Metrics::new(8.208984375, 11.140625, 8.015625, 0.09375, 8.109375, 0.0, 11.140625, 11.140625, false)),
    glyph("\\ae", true, "default", 12.0, "regular", Metrics::new(11.783203125, 6.890625, 10.4375, 0.71875, 11.15625, -0.171875, 6.71875, 6.71875, false)),
    glyph("\\AE", true, "default", 12.0, "regular", Metrics::new(11.689453125, 8.75, 10.875, 0.046875, 10.921875, 0.0, 8.75, 8.75, false)),
    glyph("\\oe", true, "default", 12.0, "regular", Metrics::new(12.275390625, 6.890625, 10.984375, 0.65625, 11.640625, -0.171875, 6.71875, 6.71875, false)),
    glyph("\\OE", true, "default", 12.0, "regular", Metrics::new(12.837890625, 8.75, 11.40625, 0.671875, 12.078125, 0.0, 8.75, 8.75, false)),
    glyph("\\o", true, "default", 12.0, "regular", Metrics::new(7.341796875, 7.65625, 6.5, 0.421875, 6.921875, -0.546875, 7.109375, 7.109375, false)),
    glyph("\\O", true, "default", 12.0, "regular", Metrics::new(9.4453125, 9.546875, 8.25, 0.59375, 8.84375, -0.40625, 9.140625, 9.140625, false)),
    glyph("\\ss", true, "default", 12.0, "regular", Metrics::new(7.55859375, 9.296875, 5.921875, 1.09375, 7.015625, -0.171875, 9.125, 9.125, false)),
    glyph("\\l", true, "default", 12.0, "regular", Metrics::new(3.41015625, 9.125, 3.40625, 0.015625, 3.421875, 0.0, 9.125, 9.125, false)),
    glyph("\\L", true, "default", 12.0, "regular", Metrics::new(6.744140625, 8.75, 6.765625, -0.078125, 6.6875, 0.0, 8.75, 8.75, false)),
    glyph("\\complement", true, "default", 12.0, "regular", Metrics::new(7.634765625, 9.078125, 5.84375, 0.796875, 6.640625, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\nexists", true, "default", 12.0, "regular", Metrics::new(7.58203125, 9.859375, 5.640625, 1.171875, 6.8125, -0.546875, 9.3125, 9.3125, false)),
    glyph("\\varnothing", true, "default", 12.0, "regular", Metrics::new(10.453125, 8.625, 8.640625, 0.90625, 9.546875, -0.109375, 8.515625, 8.515625, false)),
    glyph("\\smallin", true, "default", 12.0, "regular", Metrics::new(8.61328125, 5.703125, 6.078125, 1.265625, 7.34375, 0.90625, 6.609375, 6.609375, false)),
    glyph("\\QED", true, "default", 12.0, "regular", Metrics::new(7.634765625, 5.828125, 4.109375, 1.765625, 5.875, 0.0, 5.828125, 5.828125, false)),
    glyph("\\measuredangle", true, "default", 12.0, "regular", Metrics::new(10.7578125, 9.375, 8.390625, 1.03125, 9.421875, -0.625, 8.75, 8.75, false)),
    glyph("\\sphericalangle", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.75, 7.40625, 1.390625, 8.796875, -0.03125, 8.71875, 8.71875, false)),
    glyph("\\rightangle", true, "default", 12.0, "regular", Metrics::new(10.0546875, 6.734375, 6.734375, 1.65625, 8.390625, 1.1875, 7.921875, 7.921875, false)),
    glyph("\\therefore", true, "default", 12.0, "regular", Metrics::new(7.634765625, 6.046875, 6.21875, 0.703125, 6.921875, 1.203125, 7.25, 7.25, false)),
    glyph("\\because", true, "default", 12.0, "regular", Metrics::new(7.634765625, 6.046875, 6.21875, 0.703125, 6.921875, 1.203125, 7.25, 7.25, false)),
    glyph("\\Colon", true, "default", 12.0, "regular", Metrics::new(7.634765625, 6.046875, 6.21875, 0.703125, 6.921875, 1.203125, 7.25, 7.25, false)),
    glyph("\\lnot", true, "default", 12.0, "regular", Metrics::new(10.0546875, 3.359375, 7.515625, 1.265625, 8.78125, 1.6875, 5.046875, 5.046875, false)),
    glyph("\\sqrt", true, "default", 12.0, "regular", Metrics::new(7.646484375, 9.96875, 7.28125, 0.359375, 7.640625, -0.234375, 9.734375, 9.734375, false)),
    glyph("\\dots", true, "default", 12.0, "regular", Metrics::new(12.0, 1.484375, 9.234375, 1.390625, 10.625, 0.0, 1.484375, 1.484375, false)),
    glyph("\\adots", true, "default", 12.0, "regular", Metrics::new(12.0, 9.6875, 9.21875, 1.390625, 10.609375, -1.109375, 8.578125, 8.578125, false)),
    glyph("\\ulcorner", true, "default", 12.0, "regular", Metrics::new(5.625, 4.015625, 3.8125, 1.03125, 4.84375, 5.109375, 9.125, 9.125, false)),
    glyph("\\urcorner", true, "default", 12.0, "regular", Metrics::new(5.625, 4.015625, 3.8125, 0.78125, 4.59375, 5.109375, 9.125, 9.125, false)),
    glyph("\\llcorner", true, "default", 12.0, "regular", Metrics::new(5.625, 4.015625, 3.8125, 1.03125, 4.84375, -0.84375, 3.171875, 3.171875, false)),
    glyph("\\lrcorner", true, "default", 12.0, "regular", Metrics::new(5.625, 4.015625, 3.8125, 0.78125, 4.59375, -0.84375, 3.171875, 3.171875, false)),
    glyph("\\lbrack", true, "default", 12.0, "regular", Metrics::new(4.681640625, 10.703125, 2.484375, 1.03125, 3.515625, -1.578125, 9.125, 9.125, false)),
    glyph("\\rbrack", true, "default", 12.0, "regular", Metrics::new(4.681640625, 10.703125, 2.484375, 1.171875, 3.65625, -1.578125, 9.125, 9.125, false)),
    glyph("\\leftparen", true, "default", 12.0, "regular", Metrics::new(4.681640625, 10.6875, 2.6875, 1.03125, 3.71875, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\rightparen", true, "default", 12.0, "regular", Metrics::new(4.681640625, 10.6875, 2.6875, 0.96875, 3.65625, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\bigtriangleup", true, "default", 12.0, "regular", Metrics::new(9.228515625, 9.1875, 9.15625, 0.03125, 9.1875, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\vartriangle", true, "default", 12.0, "regular", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\blacktriangle", true, "default", 12.0, "regular", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\triangleright", true, "default", 12.0, "regular", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\blacktriangleright", true, "default", 12.0, "regular", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\bigtriangledown", true, "default", 12.0, "regular", Metrics::new(9.228515625, 9.1875, 9.15625, 0.03125, 9.1875, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\triangledown", true, "default", 12.0, "regular", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\blacktriangledown", true, "default", 12.0, "regular", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\triangleleft", true, "default", 12.0, "regular", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\blacktriangleleft", true, "default", 12.0, "regular", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\lozenge", true, "default", 12.0, "regular", Metrics::new(5.9296875, 12.484375, 5.859375, 0.03125, 5.890625, -2.796875, 9.6875, 9.6875, false)),
    glyph("\\blacksquare", true, "default", 12.0, "regular", Metrics::new(11.337890625, 9.1875, 9.15625, 1.09375, 10.25, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\square", true, "default", 12.0, "regular", Metrics::new(11.337890625, 9.1875, 9.15625, 1.09375, 10.25, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\Box", true, "default", 12.0, "regular", Metrics::new(11.337890625, 9.1875, 9.15625, 1.09375, 10.25, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\bigstar", true, "default", 12.0, "regular", Metrics::new(10.7578125, 8.71875, 9.203125, 0.78125, 9.984375, -0.046875, 8.671875, 8.671875, false)),
    glyph("\\diagup", true, "default", 12.0, "regular", Metrics::new(7.224609375, 14.015625, 8.265625, -0.515625, 7.75, -2.875, 11.140625, 11.140625, false)),
    glyph("\\diagdown", true, "default", 12.0, "regular", Metrics::new(7.224609375, 14.015625, 8.265625, -0.515625, 7.75, -2.875, 11.140625, 11.140625, false)),
    glyph("\\varspadesuit", true, "default", 12.0, "regular", Metrics::new(10.7578125, 8.75, 6.984375, 1.890625, 8.875, 0.0, 8.75, 8.75, false)),
    glyph("\\varheartsuit", true, "default", 12.0, "regular", Metrics::new(10.7578125, 8.75, 8.640625, 1.0625, 9.703125, 0.0, 8.75, 8.75, false)),
    glyph("\\vardiamondsuit", true, "default", 12.0, "regular", Metrics::new(10.7578125, 8.75, 6.71875, 2.015625, 8.734375, 0.0, 8.75, 8.75, false)),
    glyph("\\varclubsuit", true, "default", 12.0, "regular", Metrics::new(10.7578125, 8.796875, 8.078125, 1.34375, 9.421875, 0.0, 8.796875, 8.796875, false)),
    glyph("\\checkmark", true, "default", 12.0, "regular", Metrics::new(10.0546875, 6.40625, 6.21875, 1.796875, 8.015625, 1.15625, 7.5625, 7.5625, false)),
    glyph("\\maltese", true, "default", 12.0, "regular", Metrics::new(10.0546875, 8.75, 8.75, 0.65625, 9.40625, 0.0, 8.75, 8.75, false)),
    glyph("\\sun", true, "default", 12.0, "regular", Metrics::new(10.7578125, 8.765625, 8.765625, 1.0, 9.765625, 0.0, 8.765625, 8.765625, false)),
    glyph("\\mercury", true, "default", 12.0, "regular", Metrics::new(7.365234375, 10.0, 5.3125, 1.03125, 6.34375, -1.21875, 8.78125, 8.78125, false)),
    glyph("\\venus", true, "default", 12.0, "regular", Metrics::new(8.7890625, 10.28125, 6.734375, 1.03125, 7.765625, -1.5, 8.78125, 8.78125, false)),
    glyph("\\earth", true, "default", 12.0, "regular", Metrics::new(8.7890625, 10.28125, 6.734375, 1.03125, 7.765625, -0.171875, 10.109375, 10.109375, false)),
    glyph("\\mars", true, "default", 12.0, "regular", Metrics::new(10.7578125, 8.8125, 9.015625, 0.953125, 9.96875, -0.171875, 8.640625, 8.640625, false)),
    glyph("\\jupiter", true, "default", 12.0, "regular", Metrics::new(10.7578125, 8.765625, 6.78125, 1.984375, 8.765625, 0.0, 8.765625, 8.765625, false)),
    glyph("\\saturn", true, "default", 12.0, "regular", Metrics::new(10.7578125, 8.765625, 5.5, 2.625, 8.125, 0.0, 8.765625, 8.765625, false)),
    glyph("\\uranus", true, "default", 12.0, "regular", Metrics::new(10.7578125, 8.765625, 7.84375, 1.453125, 9.296875, 0.0, 8.765625, 8.765625, false)),
    glyph("\\neptune", true, "default", 12.0, "regular", Metrics::new(10.7578125, 8.765625, 7.703125, 1.53125, 9.234375, 0.0, 8.765625, 8.765625, false)),
    glyph("\\pluto", true, "default", 12.0, "regular", Metrics::new(10.7578125, 8.765625, 4.984375, 2.890625, 7.875, 0.0, 8.765625, 8.765625, false)),
    glyph("\\male", true, "default", 12.0, "regular", Metrics::new(10.7578125, 8.8125, 9.015625, 0.953125, 9.96875, -0.171875, 8.640625, 8.640625, false)),
    glyph("\\female", true, "default", 12.0, "regular", Metrics::new(8.7890625, 10.28125, 6.734375, 1.03125, 7.765625, -1.5, 8.78125, 8.78125, false)),
    glyph("\\circledR", true, "default", 12.0, "regular", Metrics::new(12.0, 8.703125, 8.6875, 1.65625, 10.34375, 0.0, 8.703125, 8.703125, false)),
    glyph("\\yen", true, "default", 12.0, "regular", Metrics::new(7.634765625, 8.75, 6.65625, 0.484375, 7.140625, 0.0, 8.75, 8.75, false)),
    glyph("\\sterling", true, "default", 12.0, "regular", Metrics::new(7.634765625, 8.90625, 5.828125, 0.75, 6.578125, 0.0, 8.90625, 8.90625, false)),
    glyph("\\cent", true, "default", 12.0, "regular", Metrics::new(7.634765625, 10.21875, 5.1875, 1.015625, 6.203125, -1.828125, 8.390625, 8.390625, false)),
    glyph("\\backprime", true, "default", 12.0, "regular", Metrics::new(2.724609375, 2.1875, 2.203125, 0.234375, 2.4375, 6.5625, 8.75, 8.75, false)),
    glyph("\\dag", true, "default", 12.0, "regular", Metrics::new(6.0, 9.90625, 5.34375, 0.328125, 5.671875, -1.15625, 8.75, 8.75, false)),
    glyph("\\ddag", true, "default", 12.0, "regular", Metrics::new(6.0, 9.90625, 5.34375, 0.328125, 5.671875, -1.15625, 8.75, 8.75, false)),
    glyph("é", true, "default", 12.0, "regular", Metrics::new(7.3828125, 9.765625, 6.09375, 0.65625, 6.75, -0.171875, 9.59375, 9.59375, false)),
    glyph(" ", true, "default", 12.0, "regular", Metrics::new(3.814453125, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, false)),
    glyph("a", true, "default", 10.0, "rm", Metrics::new(6.1279296875, 5.734375, 4.625, 0.59375, 5.21875, -0.140625, 5.59375, 5.59375, false)),
    glyph("b", true, "default", 10.0, "rm", Metrics::new(6.34765625, 7.734375, 4.890625, 0.90625, 5.796875, -0.140625, 7.59375, 7.59375, false)),
    glyph("c", true, "default", 10.0, "rm", Metrics::new(5.498046875, 5.734375, 4.328125, 0.546875, 4.875, -0.140625, 5.59375, 5.59375, false)),
    glyph("d", true, "default", 10.0, "rm", Metrics::new(6.34765625, 7.734375, 4.890625, 0.546875, 5.4375, -0.140625, 7.59375, 7.59375, false)),
    glyph("e", true, "default", 10.0, "rm", Metrics::new(6.15234375, 5.734375, 5.078125, 0.546875, 5.625, -0.140625, 5.59375, 5.59375, false)),
    glyph("f", true, "default", 10.0, "rm", Metrics::new(3.5205078125, 7.59375, 3.484375, 0.234375, 3.71875, 0.0, 7.59375, 7.59375, false)),
    glyph("g", true, "default", 10.0, "rm", Metrics::new(6.34765625, 7.671875, 4.890625, 0.546875, 5.4375, -2.078125, 5.59375, 5.59375, false)),
    glyph("h", true, "default", 10.0, "rm", Metrics::new(6.337890625, 7.59375, 4.578125, 0.90625, 5.484375, 0.0, 7.59375, 7.59375, false)),
    glyph("i", true, "default", 10.0, "rm", Metrics::new(2.7783203125, 7.59375, 0.90625, 0.9375, 1.84375, 0.0, 7.59375, 7.59375, false)),
    glyph("j", true, "default", 10.0, "rm", Metrics::new(2.7783203125, 9.671875, 2.03125, -0.1875, 1.84375, -2.078125, 7.59375, 7.59375, false)),
    glyph("k", true, "default", 10.0, "rm", Metrics::new(5.791015625, 7.59375, 4.859375, 0.90625, 5.765625, 0.0, 7.59375, 7.59375, false)),
    glyph("l", true, "default", 10.0, "rm", Metrics::new(2.7783203125, 7.59375, 0.90625, 0.9375, 1.84375, 0.0, 7.59375, 7.59375, false)),
    glyph("m", true, "default", 10.0, "rm", Metrics::new(9.7412109375, 5.59375, 7.984375, 0.90625, 8.890625, 0.0, 5.59375, 5.59375, false)),
    glyph("n", true, "default", 10.0, "rm", Metrics::new(6.337890625, 5.59375, 4.578125, 0.90625, 5.484375, 0.0, 5.59375, 5.59375, false)),
    glyph("o", true, "default", 10.0, "rm", Metrics::new(6.1181640625, 5.734375, 5.03125, 0.546875, 5.578125, -0.140625, 5.59375, 5.59375, false)),
    glyph("p", true, "default", 10.0, "rm", Metrics::new(6.34765625, 7.671875, 4.890625, 0.90625, 5.796875, -2.078125, 5.59375, 5.59375, false)),
    glyph("q", true, "default", 10.0, "rm", Metrics::new(6.34765625, 7.671875, 4.890625, 0.546875, 5.4375, -2.078125, 5.59375, 5.59375, false)),
    glyph("r", true, "default", 10.0, "rm", Metrics::new(4.111328125, 5.59375, 3.203125, 0.90625, 4.109375, 0.0, 5.59375, 5.59375, false)),
    glyph("s", true, "default", 10.0, "rm", Metrics::new(5.2099609375, 5.734375, 4.171875, 0.546875, 4.71875, -0.140625, 5.59375, 5.59375, false)),
    glyph("t", true, "default", 10.0, "rm", Metrics::new(3.9208984375, 7.015625, 3.421875, 0.265625, 3.6875, 0.0, 7.015625, 7.015625, false)),
    glyph("u", true, "default", 10.0, "rm", Metrics::new(6.337890625, 5.734375, 4.59375, 0.84375, 5.4375, -0.140625, 5.59375, 5.59375, false)),
    glyph("v", true, "default", 10.0, "rm", Metrics::new(5.91796875, 5.46875, 5.328125, 0.296875, 5.625, 0.0, 5.46875, 5.46875, false)),
    glyph("w", true, "default", 10.0, "rm", Metrics::new(8.1787109375, 5.46875, 7.34375, 0.421875, 7.765625, 0.0, 5.46875, 5.46875, false)),
    glyph("x", true, "default", 10.0, "rm", Metrics::new(5.91796875, 5.46875, 5.3125, 0.28125, 5.59375, 0.0, 5.46875, 5.46875, false)),
    glyph("y", true, "default", 10.0, "rm", Metrics::new(5.91796875, 7.546875, 5.328125, 0.296875, 5.625, -2.078125, 5.46875, 5.46875, false)),
    glyph("z", true, "default", 10.0, "rm", Metrics::new(5.2490234375, 5.46875, 4.375, 0.4375, 4.8125, 0.0, 5.46875, 5.46875, false)),
    glyph("A", true, "default", 10.0, "rm", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("B", true, "default", 10.0, "rm", Metrics::new(6.8603515625, 7.296875, 5.171875, 0.984375, 6.15625, 0.0, 7.296875, 7.296875, false)),
    glyph("C", true, "default", 10.0, "rm", Metrics::new(6.982421875, 7.5625, 5.875, 0.5625, 6.4375, -0.140625, 7.421875, 7.421875, false)),
    glyph("D", true, "default", 10.0, "rm", Metrics::new(7.7001953125, 7.296875, 6.125, 0.984375, 7.109375, 0.0, 7.296875, 7.296875, false)),
    glyph("E", true, "default", 10.0, "rm", Metrics::new(6.318359375, 7.296875, 4.6875, 0.984375, 5.671875, 0.0, 7.296875, 7.296875, false)),
    glyph("F", true, "default", 10.0, "rm", Metrics::new(5.751953125, 7.296875, 4.1875, 0.984375, 5.171875, 0.0, 7.296875, 7.296875, false)),
    glyph("G", true, "default", 10.0, "rm", Metrics::new(7.7490234375, 7.5625, 6.359375, 0.5625, 6.921875, -0.140625, 7.421875, 7.421875, false)),
    glyph("H", true, "default", 10.0, "rm", Metrics::new(7.51953125, 7.296875, 5.546875, 0.984375, 6.53125, 0.0, 7.296875, 7.296875, false)),
    glyph("I", true, "default", 10.0, "rm", Metrics::new(2.94921875, 7.296875, 0.984375, 0.984375, 1.96875, 0.0, 7.296875, 7.296875, false)),
    glyph("J", true, "default", 10.0, "rm", Metrics::new(2.94921875, 9.296875, 2.484375, -0.515625, 1.96875, -2.0, 7.296875, 7.296875, false)),
    glyph("K", true, "default", 10.0, "rm", Metrics::new(6.5576171875, 7.296875, 5.78125, 0.984375, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("L", true, "default", 10.0, "rm", Metrics::new(5.5712890625, 7.296875, 4.53125, 0.984375, 5.515625, 0.0, 7.296875, 7.296875, false)),
    glyph("M", true, "default", 10.0, "rm", Metrics::new(8.6279296875, 7.296875, 6.671875, 0.984375, 7.65625, 0.0, 7.296875, 7.296875, false)),
    glyph("N", true, "default", 10.0, "rm", Metrics::new(7.48046875, 7.296875, 5.515625, 0.984375, 6.5, 0.0, 7.296875, 7.296875, false)),
    glyph("O", true, "default", 10.0, "rm", Metrics::new(7.87109375, 7.5625, 6.75, 0.5625, 7.3125, -0.140625, 7.421875, 7.421875, false)),
    glyph("P", true, "default", 10.0, "rm", Metrics::new(6.0302734375, 7.296875, 4.703125, 0.984375, 5.6875, 0.0, 7.296875, 7.296875, false)),
    glyph("Q", true, "default", 10.0, "rm", Metrics::new(7.87109375, 8.703125, 6.75, 0.5625, 7.3125, -1.28125, 7.421875, 7.421875, false)),
    glyph("R", true, "default", 10.0, "rm", Metrics::new(6.9482421875, 7.296875, 5.671875, 0.984375, 6.65625, 0.0, 7.296875, 7.296875, false)),
    glyph("S", true, "default", 10.0, "rm", Metrics::new(6.34765625, 7.5625, 5.140625, 0.65625, 5.796875, -0.140625, 7.421875, 7.421875, false)),
    glyph("T", true, "default", 10.0, "rm", Metrics::new(6.1083984375, 7.296875, 6.171875, -0.03125, 6.140625, 0.0, 7.296875, 7.296875, false)),
    glyph("U", true, "default", 10.0, "rm", Metrics::new(7.3193359375, 7.4375, 5.578125, 0.875, 6.453125, -0.140625, 7.296875, 7.296875, false)),
    glyph("V", true, "default", 10.0, "rm", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("W", true, "default", 10.0, "rm", Metrics::new(9.8876953125, 7.296875, 9.234375, 0.328125, 9.5625, 0.0, 7.296875, 7.296875, false)),
    glyph("X", true, "default", 10.0, "rm", Metrics::new(6.8505859375, 7.296875, 6.234375, 0.296875, 6.53125, 0.0, 7.296875, 7.296875, false)),
    glyph("Y", true, "default", 10.0, "rm", Metrics::new(6.1083984375, 7.296875, 6.140625, -0.015625, 6.125, 0.0, 7.296875, 7.296875, false)),
    glyph("Z", true, "default", 10.0, "rm", Metrics::new(6.8505859375, 7.296875, 5.953125, 0.453125, 6.40625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\alpha", true, "default", 10.0, "rm", Metrics::new(6.591796875, 5.71875, 5.5625, 0.546875, 6.109375, -0.125, 5.59375, 5.59375, false)),
    glyph("\\beta", true, "default", 10.0, "rm", Metrics::new(6.3818359375, 9.734375, 4.734375, 0.9375, 5.671875, -2.078125, 7.65625, 7.65625, false)),
    glyph("\\gamma", true, "default", 10.0, "rm", Metrics::new(5.91796875, 7.546875, 5.46875, 0.15625, 5.625, -2.078125, 5.46875, 5.46875, false)),
    glyph("\\delta", true, "default", 10.0, "rm", Metrics::new(6.1181640625, 7.5625, 5.03125, 0.546875, 5.578125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\epsilon", true, "default", 10.0, "rm", Metrics::new(6.15234375, 5.734375, 4.265625, 0.546875, 4.8125, -0.140625, 5.59375, 5.59375, false)),
    glyph("\\varepsilon", true, "default", 10.0, "rm", Metrics::new(5.4052734375, 5.75, 4.078125, 0.65625, 4.734375, -0.140625, 5.609375, 5.609375, false)),
    glyph("\\zeta", true, "default", 10.0, "rm", Metrics::new(5.439453125, 9.6875, 4.453125, 0.515625, 4.96875, -2.09375, 7.59375, 7.59375, false)),
    glyph("\\eta", true, "default", 10.0, "rm", Metrics::new(6.337890625, 7.671875, 4.578125, 0.90625, 5.484375, -2.078125, 5.59375, 5.59375, false)),
    glyph("\\theta", true, "default", 10.0, "rm", Metrics::new(6.1181640625, 7.78125, 5.03125, 0.546875, 5.578125, -0.109375, 7.671875, 7.671875, false)),
    glyph("\\vartheta", true, "default", 10.0, "rm", Metrics::new(6.19140625, 7.78125, 5.03125, 0.546875, 5.578125, -0.109375, 7.671875, 7.671875, false)),
    glyph("\\iota", true, "default", 10.0, "rm", Metrics::new(3.3837890625, 5.46875, 2.21875, 0.8125, 3.03125, 0.0, 5.46875, 5.46875, false)),
    glyph("\\kappa", true, "default", 10.0, "rm", Metrics::new(5.8935546875, 5.46875, 4.71875, 0.9375, 5.65625, 0.0, 5.46875, 5.46875, false)),
    glyph("\\lambda", true, "default", 10.0, "rm", Metrics::new(5.91796875, 7.59375, 5.328125, 0.296875, 5.625, 0.0, 7.59375, 7.59375, false)),
    glyph("\\mu", true, "default", 10.0, "rm", Metrics::new(6.3623046875, 7.546875, 5.28125, 0.84375, 6.125, -2.078125, 5.46875, 5.46875, false)),
    glyph("\\nu", true, "default", 10.0, "rm", Metrics::new(5.5859375, 5.46875, 4.765625, 0.359375, 5.125, 0.0, 5.46875, 5.46875, false)),
    glyph("\\xi", true, "default", 10.0, "rm", Metrics::new(5.576171875, 9.6875, 4.484375, 0.515625, 5.0, -2.09375, 7.59375, 7.59375, false)),
    glyph("\\pi", true, "default", 10.0, "rm", Metrics::new(6.0205078125, 5.65625, 5.390625, 0.359375, 5.75, -0.1875, 5.46875, 5.46875, false)),
    glyph("\\varpi", true, "default", 10.0, "rm", Metrics::new(8.3740234375, 5.609375, 7.71875, 0.3125, 8.03125, -0.140625, 5.46875, 5.46875, false)),
    glyph("\\rho", true, "default", 10.0, "rm", Metrics::new(6.34765625, 7.671875, 4.890625, 0.90625, 5.796875, -2.078125, 5.59375, 5.59375, false)),
    glyph("\\varrho", true, "default", 10.0, "rm", Metrics::new(6.34765625, 7.671875, 4.890625, 0.90625, 5.796875, -2.078125, 5.59375, 5.59375, false)),
    glyph("\\sigma", true, "default", 10.0, "rm", Metrics::new(6.337890625, 5.609375, 5.5, 0.546875, 6.046875, -0.140625, 5.46875, 5.46875, false)),
    glyph("\\varsigma", true, "default", 10.0, "rm", Metrics::new(5.869140625, 7.6875, 4.328125, 0.546875, 4.875, -2.09375, 5.59375, 5.59375, false)),
    glyph("\\tau", true, "default", 10.0, "rm", Metrics::new(6.0205078125, 5.46875, 5.046875, 0.484375, 5.53125, 0.0, 5.46875, 5.46875, false)),
    glyph("\\upsilon", true, "default", 10.0, "rm", Metrics::new(5.7861328125, 5.609375, 4.46875, 0.734375, 5.203125, -0.140625, 5.46875, 5.46875, false)),
    glyph("\\phi", true, "default", 10.0, "rm", Metrics::new(6.5966796875, 9.671875, 5.46875, 0.546875, 6.015625, -2.078125, 7.59375, 7.59375, false)),
    glyph("\\varphi", true, "default", 10.0, "rm", Metrics::new(6.5966796875, 7.59375, 5.46875, 0.546875, 6.015625, -2.078125, 5.515625, 5.515625, false)),
    glyph("\\chi", true, "default", 10.0, "rm", Metrics::new(5.7763671875, 7.546875, 5.203125, 0.28125, 5.484375, -2.078125, 5.46875, 5.46875, false)),
    glyph("\\psi", true, "default", 10.0, "rm", Metrics::new(6.5966796875, 7.546875, 5.46875, 0.546875, 6.015625, -2.078125, 5.46875, 5.46875, false)),
    glyph("\\omega", true, "default", 10.0, "rm", Metrics::new(8.3740234375, 5.609375, 7.03125, 0.65625, 7.6875, -0.140625, 5.46875, 5.46875, false)),
    glyph("\\Gamma", true, "default", 10.0, "rm", Metrics::new(5.5712890625, 7.296875, 4.53125, 0.984375, 5.515625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Delta", true, "default", 10.0, "rm", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Theta", true, "default", 10.0, "rm", Metrics::new(7.87109375, 7.5625, 6.75, 0.5625, 7.3125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\Lambda", true, "default", 10.0, "rm", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Xi", true, "default", 10.0, "rm", Metrics::new(6.318359375, 7.296875, 4.5, 0.984375, 5.484375, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Pi", true, "default", 10.0, "rm", Metrics::new(7.51953125, 7.296875, 5.546875, 0.984375, 6.53125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Sigma", true, "default", 10.0, "rm", Metrics::new(6.318359375, 7.296875, 4.6875, 0.984375, 5.671875, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Upsilon", true, "default", 10.0, "rm", Metrics::new(6.1083984375, 7.296875, 6.140625, -0.015625, 6.125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Phi", true, "default", 10.0, "rm", Metrics::new(7.87109375, 7.296875, 6.75, 0.5625, 7.3125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Psi", true, "default", 10.0, "rm", Metrics::new(7.87109375, 7.296875, 6.75, 0.5625, 7.3125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Omega", true, "default", 10.0, "rm", Metrics::new(7.6416015625, 7.375, 6.890625, 0.375, 7.265625, 0.0, 7.375, 7.375, false)),
    glyph("\\sum", true, "default", 10.0, "rm", Metrics::new(6.73828125, 9.109375, 6.40625, 0.125, 6.53125, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\prod", true, "default", 10.0, "rm", Metrics::new(7.568359375, 9.109375, 6.03125, 0.765625, 6.796875, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\coprod", true, "default", 10.0, "rm", Metrics::new(7.568359375, 9.109375, 6.03125, 0.765625, 6.796875, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\int", true, "default", 10.0, "rm", Metrics::new(5.2099609375, 9.6875, 4.0625, 0.578125, 4.640625, -2.125, 7.5625, 7.5625, true)),
    glyph("\\oint", true, "default", 10.0, "rm", Metrics::new(5.2099609375, 9.6875, 4.0625, 0.578125, 4.640625, -2.125, 7.5625, 7.5625, true)),
    glyph("\\iint", true, "default", 10.0, "rm", Metrics::new(7.890625, 9.6875, 6.734375, 0.578125, 7.3125, -2.125, 7.5625, 7.5625, false)),
    glyph("\\iiint", true, "default", 10.0, "rm", Metrics::new(10.5712890625, 9.6875, 9.421875, 0.578125, 10.0, -2.125, 7.5625, 7.5625, false)),
    glyph("\\bigcap", true, "default", 10.0, "rm", Metrics::new(8.203125, 9.109375, 6.828125, 0.6875, 7.515625, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\bigcup", true, "default", 10.0, "rm", Metrics::new(8.203125, 9.109375, 6.828125, 0.6875, 7.515625, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\bigvee", true, "default", 10.0, "rm", Metrics::new(8.203125, 9.109375, 8.265625, -0.03125, 8.234375, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\bigwedge", true, "default", 10.0, "rm", Metrics::new(8.203125, 9.109375, 8.265625, -0.03125, 8.234375, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\bigoplus", true, "default", 10.0, "rm", Metrics::new(10.0, 9.453125, 9.4375, 0.28125, 9.71875, -1.984375, 7.46875, 7.46875, false)),
    glyph("\\bigotimes", true, "default", 10.0, "rm", Metrics::new(10.0, 9.453125, 9.4375, 0.28125, 9.71875, -1.984375, 7.46875, 7.46875, false)),
    glyph("\\pm", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.265625, 6.25, 1.0625, 7.3125, 0.0, 6.265625, 6.265625, false)),
    glyph("\\mp", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.265625, 6.25, 1.0625, 7.3125, 0.0, 6.265625, 6.265625, false)),
    glyph("\\times", true, "default", 10.0, "rm", Metrics::new(8.37890625, 5.65625, 5.640625, 1.375, 7.015625, 0.3125, 5.96875, 5.96875, false)),
    glyph("\\div", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.8125, 6.25, 1.0625, 7.3125, 0.734375, 5.546875, 5.546875, false)),
    glyph("\\cdot", true, "default", 10.0, "rm", Metrics::new(3.1787109375, 1.234375, 1.03125, 1.0625, 2.09375, 2.859375, 4.09375, 4.09375, false)),
    glyph("\\ast", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.265625, 5.828125, 1.28125, 7.109375, 0.0, 6.265625, 6.265625, false)),
    glyph("\\star", true, "default", 10.0, "rm", Metrics::new(6.259765625, 3.640625, 3.828125, 1.21875, 5.046875, 1.484375, 5.125, 5.125, false)),
    glyph("\\circ", true, "default", 10.0, "rm", Metrics::new(6.259765625, 3.109375, 3.09375, 1.578125, 4.671875, 1.59375, 4.703125, 4.703125, false)),
    glyph("\\bullet", true, "default", 10.0, "rm", Metrics::new(6.259765625, 2.890625, 2.890625, 1.6875, 4.578125, 1.6875, 4.578125, 4.578125, false)),
    glyph("\\cap", true, "default", 10.0, "rm", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\cup", true, "default", 10.0, "rm", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\uplus", true, "default", 10.0, "rm", Metrics::new(7.3193359375, 5.78125, 4.734375, 1.296875, 6.03125, 0.03125, 5.8125, 5.8125, false)),
    glyph("\\sqcap", true, "default", 10.0, "rm", Metrics::new(7.802734375, 6.265625, 5.6875, 1.0625, 6.75, 0.0, 6.265625, 6.265625, false)),
    glyph("\\sqcup", true, "default", 10.0, "rm", Metrics::new(7.802734375, 6.265625, 5.6875, 1.0625, 6.75, 0.0, 6.265625, 6.265625, false)),
    glyph("\\vee", true, "default", 10.0, "rm", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\wedge", true, "default", 10.0, "rm", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\setminus", true, "default", 10.0, "rm", Metrics::new(6.3671875, 8.21875, 3.375, 1.921875, 5.296875, -0.53125, 7.6875, 7.6875, false)),
    glyph("\\wr", true, "default", 10.0, "rm", Metrics::new(3.75, 6.265625, 1.71875, 1.015625, 2.734375, 0.0, 6.265625, 6.265625, false)),
    glyph("\\diamond", true, "default", 10.0, "rm", Metrics::new(6.259765625, 4.984375, 4.984375, 0.640625, 5.625, 0.640625, 5.625, 5.625, false)),
    glyph("\\oplus", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\ominus", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\otimes", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\oslash", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\odot", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\bigcirc", true, "default", 10.0, "rm", Metrics::new(8.7255859375, 7.703125, 7.625, 0.546875, 8.171875, -1.25, 6.453125, 6.453125, false)),
    glyph("\\dagger", true, "default", 10.0, "rm", Metrics::new(5.0, 8.265625, 4.4375, 0.28125, 4.71875, -0.96875, 7.296875, 7.296875, false)),
    glyph("\\ddagger", true, "default", 10.0, "rm", Metrics::new(5.0, 8.265625, 4.4375, 0.28125, 4.71875, -0.96875, 7.296875, 7.296875, false)),
    glyph("\\leq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 5.828125, 6.25, 1.0625, 7.3125, 0.0, 5.828125, 5.828125, false)),
    glyph("\\geq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 5.828125, 6.25, 1.0625, 7.3125, 0.0, 5.828125, 5.828125, false)),
    glyph("\\neq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 5.890625, 6.25, 1.0625, 7.3125, 0.1875, 6.078125, 6.078125, false)),
    glyph("\\equiv", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.46875, 6.25, 1.0625, 7.3125, 0.90625, 5.375, 5.375, false)),
    glyph("\\sim", true, "default", 10.0, "rm", Metrics::new(8.37890625, 1.71875, 6.25, 1.0625, 7.3125, 2.28125, 4.0, 4.0, false)),
    glyph("\\simeq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 3.21875, 6.25, 1.0625, 7.3125, 1.71875, 4.9375, 4.9375, false)),
    glyph("\\approx", true, "default", 10.0, "rm", Metrics::new(8.37890625, 3.609375, 6.25, 1.0625, 7.3125, 1.328125, 4.9375, 4.9375, false)),
    glyph("\\cong", true, "default", 10.0, "rm", Metrics::new(8.37890625, 5.03125, 6.25, 1.0625, 7.3125, 0.90625, 5.9375, 5.9375, false)),
    glyph("\\propto", true, "default", 10.0, "rm", Metrics::new(7.1435546875, 3.75, 4.984375, 1.078125, 6.0625, 1.125, 4.875, 4.875, false)),
    glyph("\\subset", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.671875, 6.390625, 1.0, 7.390625, 0.796875, 5.46875, 5.46875, false)),
    glyph("\\supset", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.671875, 6.390625, 1.0, 7.390625, 0.796875, 5.46875, 5.46875, false)),
    glyph("\\subseteq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.140625, 6.390625, 0.921875, 7.3125, 0.0, 6.140625, 6.140625, false)),
    glyph("\\supseteq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.140625, 6.390625, 1.0625, 7.453125, 0.0, 6.140625, 6.140625, false)),
    glyph("\\in", true, "default", 10.0, "rm", Metrics::new(8.7109375, 7.1875, 7.0, 0.859375, 7.859375, -0.09375, 7.09375, 7.09375, false)),
    glyph("\\ni", true, "default", 10.0, "rm", Metrics::new(8.7109375, 7.1875, 7.0, 0.859375, 7.859375, -0.09375, 7.09375, 7.09375, false)),
    glyph("\\notin", true, "default", 10.0, "rm", Metrics::new(8.7109375, 9.734375, 7.0, 0.859375, 7.859375, -1.375, 8.359375, 8.359375, false)),
    glyph("\\ll", true, "default", 10.0, "rm", Metrics::new(10.46875, 5.875, 9.03125, 0.71875, 9.75, 0.21875, 6.09375, 6.09375, false)),
    glyph("\\gg", true, "default", 10.0, "rm", Metrics::new(10.46875, 5.875, 9.03125, 0.71875, 9.75, 0.21875, 6.09375, 6.09375, false)),
    glyph("\\prec", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.015625, 6.25, 1.0625, 7.3125, -0.375, 6.640625, 6.640625, false)),
    glyph("\\succ", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.015625, 6.25, 1.0625, 7.3125, -0.375, 6.640625, 6.640625, false)),
    glyph("\\mid", true, "default", 10.0, "rm", Metrics::new(5.0, 9.84375, 0.78125, 2.109375, 2.890625, -2.140625, 7.703125, 7.703125, false)),
    glyph("\\parallel", true, "default", 10.0, "rm", Metrics::new(5.0, 9.84375, 2.34375, 1.328125, 3.671875, -2.140625, 7.703125, 7.703125, false)),
    glyph("\\vdash", true, "default", 10.0, "rm", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\dashv", true, "default", 10.0, "rm", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\models", true, "default", 10.0, "rm", Metrics::new(5.205078125, 7.0, 3.5, 0.859375, 4.359375, 0.0, 7.0, 7.0, false)),
    glyph("\\asymp", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.15625, 6.25, 1.0625, 7.3125, 1.046875, 5.203125, 5.203125, false)),
    glyph("\\doteq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.53125, 6.25, 1.0625, 7.3125, 1.71875, 6.25, 6.25, false)),
    glyph("\\bowtie", true, "default", 10.0, "rm", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\leftarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\rightarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\uparrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.328125, 4.28125, 2.046875, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\downarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.328125, 4.28125, 2.046875, 6.328125, -0.03125, 7.296875, 7.296875, false)),
    glyph("\\leftrightarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.40625, 0.484375, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\updownarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.40625, 4.28125, 2.046875, 6.328125, -0.078125, 7.328125, 7.328125, false)),
    glyph("\\Leftarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Rightarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Uparrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.328125, 4.265625, 2.0625, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\Downarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.328125, 4.265625, 2.0625, 6.328125, -0.03125, 7.296875, 7.296875, false)),
    glyph("\\Leftrightarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.40625, 0.484375, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Updownarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.40625, 4.28125, 2.046875, 6.328125, -0.078125, 7.328125, 7.328125, false)),
    glyph("\\mapsto", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\longleftarrow", true, "default", 10.0, "rm", Metrics::new(14.3359375, 4.28125, 13.28125, 0.484375, 13.765625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\longrightarrow", true, "default", 10.0, "rm", Metrics::new(14.3359375, 4.28125, 13.265625, 0.578125, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\hookleftarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.65625, 7.3125, 0.484375, 7.796875, 1.0, 5.65625, 5.65625, false)),
    glyph("\\hookrightarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.65625, 7.3125, 0.578125, 7.890625, 1.0, 5.65625, 5.65625, false)),
    glyph("\\nearrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 5.625, 5.625, 1.40625, 7.03125, 0.25, 5.875, 5.875, false)),
    glyph("\\searrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 5.625, 5.625, 1.40625, 7.03125, 0.25, 5.875, 5.875, false)),
    glyph("\\swarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 5.625, 5.625, 1.40625, 7.03125, 0.25, 5.875, 5.875, false)),
    glyph("\\nwarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 5.625, 5.625, 1.40625, 7.03125, 0.25, 5.875, 5.875, false)),
    glyph("\\leftharpoonup", true, "default", 10.0, "rm", Metrics::new(8.37890625, 2.5625, 7.328125, 0.484375, 7.8125, 2.71875, 5.28125, 5.28125, false)),
    glyph("\\rightharpoonup", true, "default", 10.0, "rm", Metrics::new(8.37890625, 2.5625, 7.3125, 0.578125, 7.890625, 2.71875, 5.28125, 5.28125, false)),
    glyph("\\rightleftharpoons", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.140625, 7.40625, 0.484375, 7.890625, 0.0625, 6.203125, 6.203125, false)),
    glyph("\\infty", true, "default", 10.0, "rm", Metrics::new(8.330078125, 3.75, 6.171875, 1.078125, 7.25, 1.125, 4.875, 4.875, false)),
    glyph("\\partial", true, "default", 10.0, "rm", Metrics::new(5.1708984375, 6.765625, 4.234375, 0.46875, 4.703125, -0.140625, 6.625, 6.625, false)),
    glyph("\\nabla", true, "default", 10.0, "rm", Metrics::new(6.689453125, 7.1875, 6.75, -0.03125, 6.71875, 0.0, 7.1875, 7.1875, false)),
    glyph("\\forall", true, "default", 10.0, "rm", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\exists", true, "default", 10.0, "rm", Metrics::new(6.318359375, 7.296875, 4.6875, 0.984375, 5.671875, 0.0, 7.296875, 7.296875, false)),
    glyph("\\neg", true, "default", 10.0, "rm", Metrics::new(8.37890625, 2.796875, 6.25, 1.0625, 7.3125, 1.40625, 4.203125, 4.203125, false)),
    glyph("\\emptyset", true, "default", 10.0, "rm", Metrics::new(8.7109375, 7.1875, 7.203125, 0.75, 7.953125, -0.09375, 7.09375, 7.09375, false)),
    glyph("\\aleph", true, "default", 10.0, "rm", Metrics::new(7.451171875, 7.5625, 6.625, 0.5, 7.125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\hbar", true, "default", 10.0, "rm", Metrics::new(6.9482421875, 7.59375, 5.1875, 0.59375, 5.78125, 0.0, 7.59375, 7.59375, false)),
    glyph("\\ell", true, "default", 10.0, "rm", Metrics::new(4.130859375, 7.5625, 3.671875, -0.140625, 3.53125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\wp", true, "default", 10.0, "rm", Metrics::new(6.97265625, 7.171875, 6.046875, 0.53125, 6.578125, -2.21875, 4.953125, 4.953125, false)),
    glyph("\\Re", true, "default", 10.0, "rm", Metrics::new(8.1396484375, 7.5625, 7.625, 0.40625, 8.03125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\Im", true, "default", 10.0, "rm", Metrics::new(6.97265625, 7.5625, 6.078125, 0.515625, 6.59375, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\prime", true, "default", 10.0, "rm", Metrics::new(2.2705078125, 1.828125, 1.828125, 0.203125, 2.03125, 5.46875, 7.296875, 7.296875, false)),
    glyph("\\angle", true, "default", 10.0, "rm", Metrics::new(8.96484375, 7.296875, 7.0, 0.859375, 7.859375, 0.0, 7.296875, 7.296875, false)),
    glyph("\\triangle", true, "default", 10.0, "rm", Metrics::new(7.6904296875, 7.65625, 7.625, 0.03125, 7.65625, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\surd", true, "default", 10.0, "rm", Metrics::new(6.3720703125, 8.3125, 6.078125, 0.296875, 6.375, -0.203125, 8.109375, 8.109375, false)),
    glyph("\\top", true, "default", 10.0, "rm", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\bot", true, "default", 10.0, "rm", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\flat", true, "default", 10.0, "rm", Metrics::new(4.716796875, 7.34375, 3.03125, 0.890625, 3.921875, -0.03125, 7.3125, 7.3125, false)),
    glyph("\\natural", true, "default", 10.0, "rm", Metrics::new(3.57421875, 7.3125, 1.890625, 0.84375, 2.734375, 0.0, 7.3125, 7.3125, false)),
    glyph("\\sharp", true, "default", 10.0, "rm", Metrics::new(4.8388671875, 7.3125, 3.15625, 0.84375, 4.0, 0.0, 7.3125, 7.3125, false)),
    glyph("\\clubsuit", true, "default", 10.0, "rm", Metrics::new(8.96484375, 7.28125, 6.734375, 1.109375, 7.84375, 0.0, 7.28125, 7.28125, false)),
    glyph("\\diamondsuit", true, "default", 10.0, "rm", Metrics::new(8.96484375, 7.28125, 5.59375, 1.6875, 7.28125, 0.0, 7.28125, 7.28125, false)),
    glyph("\\heartsuit", true, "default", 10.0, "rm", Metrics::new(8.96484375, 7.265625, 7.15625, 0.90625, 8.0625, 0.0, 7.265625, 7.265625, false)),
    glyph("\\spadesuit", true, "default", 10.0, "rm", Metrics::new(8.96484375, 7.28125, 5.8125, 1.578125, 7.390625, 0.0, 7.28125, 7.28125, false)),
    glyph("\\ldots", true, "default", 10.0, "rm", Metrics::new(10.0, 1.234375, 7.6875, 1.15625, 8.84375, 0.0, 1.234375, 1.234375, false)),
    glyph("\\cdots", true, "default", 10.0, "rm", Metrics::new(10.0, 1.25, 7.6875, 1.15625, 8.84375, 2.484375, 3.734375, 3.734375, false)),
    glyph("\\vdots", true, "default", 10.0, "rm", Metrics::new(10.0, 8.078125, 1.03125, 4.484375, 5.515625, -0.921875, 7.15625, 7.15625, false)),
    glyph("\\ddots", true, "default", 10.0, "rm", Metrics::new(10.0, 8.078125, 7.6875, 1.15625, 8.84375, -0.921875, 7.15625, 7.15625, false)),
    glyph("\\langle", true, "default", 10.0, "rm", Metrics::new(3.9013671875, 8.90625, 2.203125, 0.890625, 3.09375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rangle", true, "default", 10.0, "rm", Metrics::new(3.9013671875, 8.90625, 2.21875, 0.796875, 3.015625, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\lfloor", true, "default", 10.0, "rm", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.859375, 2.9375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rfloor", true, "default", 10.0, "rm", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.96875, 3.046875, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\lceil", true, "default", 10.0, "rm", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.859375, 2.9375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rceil", true, "default", 10.0, "rm", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.96875, 3.046875, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\lbrace", true, "default", 10.0, "rm", Metrics::new(6.3623046875, 9.21875, 3.859375, 1.25, 5.109375, -1.625, 7.59375, 7.59375, false)),
    glyph("\\rbrace", true, "default", 10.0, "rm", Metrics::new(6.3623046875, 9.21875, 3.859375, 1.25, 5.109375, -1.625, 7.59375, 7.59375, false)),
    glyph("\\vert", true, "default", 10.0, "rm", Metrics::new(3.369140625, 10.0, 0.828125, 1.265625, 2.09375, -2.359375, 7.640625, 7.640625, false)),
    glyph("\\Vert", true, "default", 10.0, "rm", Metrics::new(5.0, 10.0, 2.453125, 1.265625, 3.71875, -2.359375, 7.640625, 7.640625, false)),
    glyph("\\backslash", true, "default", 10.0, "rm", Metrics::new(3.369140625, 8.21875, 3.375, 0.0, 3.375, -0.921875, 7.296875, 7.296875, false)),
    glyph("\\S", true, "default", 10.0, "rm", Metrics::new(5.0, 8.375, 4.09375, 0.453125, 4.546875, -0.953125, 7.421875, 7.421875, false)),
    glyph("\\P", true, "default", 10.0, "rm", Metrics::new(6.3623046875, 8.265625, 4.515625, 0.765625, 5.28125, -0.96875, 7.296875, 7.296875, false)),
    glyph("\\copyright", true, "default", 10.0, "rm", Metrics::new(10.0, 7.25, 7.25, 1.375, 8.625, 0.0, 7.25, 7.25, false)),
    glyph("\\degree", true, "default", 10.0, "rm", Metrics::new(5.0, 3.09375, 3.09375, 0.953125, 4.046875, 4.328125, 7.421875, 7.421875, false)),
    glyph("\\imath", true, "default", 10.0, "rm", Metrics::new(2.7783203125, 5.59375, 0.90625, 0.9375, 1.84375, 0.0, 5.59375, 5.59375, false)),
    glyph("\\jmath", true, "default", 10.0, "rm", Metrics::new(2.7783203125, 7.546875, 2.03125, -0.1875, 1.84375, -2.078125, 5.46875, 5.46875, false)),
    glyph("\\nleftarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\nrightarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\twoheadleftarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\twoheadrightarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\leftarrowtail", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\rightarrowtail", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\mapsfrom", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\mapsup", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.328125, 4.265625, 2.0625, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\mapsdown", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.328125, 4.265625, 2.0625, 6.328125, -0.03125, 7.296875, 7.296875, false)),
    glyph("\\looparrowleft", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.65625, 7.3125, 0.484375, 7.796875, 1.0, 5.65625, 5.65625, false)),
    glyph("\\looparrowright", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.65625, 7.3125, 0.578125, 7.890625, 1.0, 5.65625, 5.65625, false)),
    glyph("\\leftrightsquigarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.40625, 0.484375, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\nleftrightarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.421875, 7.40625, 0.484375, 7.890625, 0.921875, 5.34375, 5.34375, false)),
    glyph("\\Lsh", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.4375, 4.609375, 1.6875, 6.296875, 0.0, 7.4375, 7.4375, false)),
    glyph("\\Rsh", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.4375, 4.59375, 2.09375, 6.6875, 0.0, 7.4375, 7.4375, false)),
    glyph("\\curvearrowleft", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.65625, 7.78125, 0.21875, 8.0, 2.03125, 6.6875, 6.6875, false)),
    glyph("\\curvearrowright", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.65625, 7.765625, 0.390625, 8.15625, 2.03125, 6.6875, 6.6875, false)),
    glyph("\\circlearrowleft", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.171875, 6.59375, 1.03125, 7.625, 0.625, 6.796875, 6.796875, false)),
    glyph("\\circlearrowright", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.171875, 6.59375, 0.765625, 7.359375, 0.625, 6.796875, 6.796875, false)),
    glyph("\\leftharpoondown", true, "default", 10.0, "rm", Metrics::new(8.37890625, 2.546875, 7.328125, 0.484375, 7.8125, 1.0, 3.546875, 3.546875, false)),
    glyph("\\upharpoonright", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.328125, 2.546875, 3.78125, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\upharpoonleft", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.328125, 2.5625, 2.046875, 4.609375, 0.0, 7.328125, 7.328125, false)),
    glyph("\\rightharpoondown", true, "default", 10.0, "rm", Metrics::new(8.37890625, 2.546875, 7.3125, 0.578125, 7.890625, 1.0, 3.546875, 3.546875, false)),
    glyph("\\downharpoonright", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.328125, 2.546875, 3.78125, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\downharpoonleft", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.328125, 2.5625, 2.046875, 4.609375, 0.0, 7.328125, 7.328125, false)),
    glyph("\\rightleftarrows", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.203125, 7.40625, 0.484375, 7.890625, -0.46875, 6.734375, 6.734375, false)),
    glyph("\\leftrightarrows", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.203125, 7.40625, 0.484375, 7.890625, -0.46875, 6.734375, 6.734375, false)),
    glyph("\\leftleftarrows", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.203125, 7.328125, 0.484375, 7.8125, -0.46875, 6.734375, 6.734375, false)),
    glyph("\\upuparrows", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.328125, 7.203125, 0.59375, 7.796875, 0.0, 7.328125, 7.328125, false)),
    glyph("\\rightrightarrows", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.203125, 7.3125, 0.578125, 7.890625, -0.46875, 6.734375, 6.734375, false)),
    glyph("\\downdownarrows", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.328125, 7.203125, 0.59375, 7.796875, -0.03125, 7.296875, 7.296875, false)),
    glyph("\\leftrightharpoons", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.140625, 7.40625, 0.484375, 7.890625, 0.0625, 6.203125, 6.203125, false)),
    glyph("\\nLeftarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\nLeftrightarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.390625, 7.40625, 0.484375, 7.890625, 0.9375, 5.328125, 5.328125, false)),
    glyph("\\nRightarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Lleftarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Rrightarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\leftsquigarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\rightsquigarrow", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\longleftrightarrow", true, "default", 10.0, "rm", Metrics::new(14.3359375, 4.28125, 13.359375, 0.484375, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Longleftarrow", true, "default", 10.0, "rm", Metrics::new(14.3359375, 4.28125, 13.28125, 0.484375, 13.765625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Longrightarrow", true, "default", 10.0, "rm", Metrics::new(14.3359375, 4.28125, 13.265625, 0.578125, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Longleftrightarrow", true, "default", 10.0, "rm", Metrics::new(14.3359375, 4.28125, 13.359375, 0.484375, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\longmapsto", true, "default", 10.0, "rm", Metrics::new(14.3359375, 4.28125, 13.265625, 0.578125, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\nmid", true, "default", 10.0, "rm", Metrics::new(5.0, 9.84375, 4.0, 0.5, 4.5, -2.140625, 7.703125, 7.703125, false)),
    glyph("\\nparallel", true, "default", 10.0, "rm", Metrics::new(5.0, 9.84375, 4.0, 0.5, 4.5, -2.140625, 7.703125, 7.703125, false)),
    glyph("\\backsim", true, "default", 10.0, "rm", Metrics::new(8.37890625, 1.71875, 6.25, 1.0625, 7.3125, 2.28125, 4.0, 4.0, false)),
    glyph("\\nsim", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.765625, 6.25, 1.0625, 7.3125, 0.765625, 5.53125, 5.53125, false)),
    glyph("\\eqsim", true, "default", 10.0, "rm", Metrics::new(8.37890625, 3.21875, 6.25, 1.0625, 7.3125, 1.328125, 4.546875, 4.546875, false)),
    glyph("\\ncong", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.625, 6.25, 1.0625, 7.3125, -0.046875, 6.578125, 6.578125, false)),
    glyph("\\napprox", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.21875, 6.25, 1.0625, 7.3125, 0.03125, 6.25, 6.25, false)),
    glyph("\\approxeq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 5.078125, 6.25, 1.0625, 7.3125, 0.90625, 5.984375, 5.984375, false)),
    glyph("\\allequal", true, "default", 10.0, "rm", Metrics::new(8.37890625, 5.03125, 6.25, 1.0625, 7.3125, 0.90625, 5.9375, 5.9375, false)),
    glyph("\\Bumpeq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 5.734375, 6.25, 1.0625, 7.3125, 0.265625, 6.0, 6.0, false)),
    glyph("\\bumpeq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 6.25, 1.0625, 7.3125, 1.71875, 6.0, 6.0, false)),
    glyph("\\Doteq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.234375, 6.25, 1.0625, 7.3125, 0.015625, 6.25, 6.25, false)),
    glyph("\\fallingdotseq", true, "default", 10.0, "rm", Metrics::new(8.388671875, 6.21875, 6.265625, 1.0625, 7.328125, 0.03125, 6.25, 6.25, false)),
    glyph("\\risingdotseq", true, "default", 10.0, "rm", Metrics::new(8.388671875, 6.21875, 6.265625, 1.0625, 7.328125, 0.03125, 6.25, 6.25, false)),
    glyph("\\coloneq", true, "default", 10.0, "rm", Metrics::new(10.0, 3.25, 7.984375, 1.015625, 9.0, 1.515625, 4.765625, 4.765625, false)),
    glyph("\\eqcolon", true, "default", 10.0, "rm", Metrics::new(10.0, 3.234375, 8.0, 1.0, 9.0, 1.515625, 4.75, 4.75, false)),
    glyph("\\eqcirc", true, "default", 10.0, "rm", Metrics::new(8.37890625, 2.828125, 6.25, 1.0625, 7.3125, 1.71875, 4.546875, 4.546875, false)),
    glyph("\\circeq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 5.890625, 6.25, 1.0625, 7.3125, 1.71875, 7.609375, 7.609375, false)),
    glyph("\\wedgeq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.40625, 6.25, 1.0625, 7.3125, 1.71875, 8.125, 8.125, false)),
    glyph("\\veeeq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.40625, 6.25, 1.0625, 7.3125, 1.71875, 8.125, 8.125, false)),
    glyph("\\stareq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.765625, 6.25, 1.0625, 7.3125, 1.71875, 8.484375, 8.484375, false)),
    glyph("\\triangleq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.8125, 6.25, 1.0625, 7.3125, 1.71875, 8.53125, 8.53125, false)),
    glyph("\\nequiv", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.75, 6.25, 1.0625, 7.3125, -0.25, 6.5, 6.5, false)),
    glyph("\\leqq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.203125, 6.265625, 1.0625, 7.328125, -0.828125, 6.375, 6.375, false)),
    glyph("\\geqq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.203125, 6.265625, 1.0625, 7.328125, -0.828125, 6.375, 6.375, false)),
    glyph("\\lneqq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 8.015625, 6.265625, 1.0625, 7.328125, -1.640625, 6.375, 6.375, false)),
    glyph("\\gneqq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 8.015625, 6.265625, 1.0625, 7.328125, -1.640625, 6.375, 6.375, false)),
    glyph("\\between", true, "default", 10.0, "rm", Metrics::new(4.638671875, 8.90625, 2.921875, 0.859375, 3.78125, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\nless", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.703125, 6.25, 1.0625, 7.3125, 0.03125, 6.734375, 6.734375, false)),
    glyph("\\ngtr", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.71875, 6.25, 1.0625, 7.3125, -0.46875, 6.25, 6.25, false)),
    glyph("\\nleq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.6875, 6.25, 1.0625, 7.3125, -1.015625, 6.671875, 6.671875, false)),
    glyph("\\ngeq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.6875, 6.25, 1.0625, 7.3125, -1.015625, 6.671875, 6.671875, false)),
    glyph("\\lesssim", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.375, 6.265625, 1.0625, 7.328125, -0.546875, 5.828125, 5.828125, false)),
    glyph("\\gtrsim", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.21875, 6.265625, 1.0625, 7.328125, -0.390625, 5.828125, 5.828125, false)),
    glyph("\\lessgtr", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.734375, 6.3125, 1.015625, 7.328125, -0.875, 6.859375, 6.859375, false)),
    glyph("\\gtrless", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.734375, 6.3125, 1.015625, 7.328125, -0.875, 6.859375, 6.859375, false)),
    glyph("\\preccurlyeq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.71875, 6.25, 1.0625, 7.3125, -1.046875, 6.671875, 6.671875, false)),
    glyph("\\succcurlyeq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.71875, 6.25, 1.0625, 7.3125, -1.046875, 6.671875, 6.671875, false)),
    glyph("\\precsim", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.515625, 6.25, 1.0625, 7.3125, -0.84375, 6.671875, 6.671875, false)),
    glyph("\\succsim", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.515625, 6.25, 1.0625, 7.3125, -0.84375, 6.671875, 6.671875, false)),
    glyph("\\nprec", true, "default", 10.0, "rm", Metrics::new(8.37890625, 8.25, 6.25, 1.0625, 7.3125, -0.609375, 7.640625, 7.640625, false)),
    glyph("\\nsucc", true, "default", 10.0, "rm", Metrics::new(8.37890625, 8.25, 6.25, 1.0625, 7.3125, -1.375, 6.875, 6.875, false)),
    glyph("\\nsubset", true, "default", 10.0, "rm", Metrics::new(8.37890625, 8.234375, 6.390625, 1.0, 7.390625, -0.96875, 7.265625, 7.265625, false)),
    glyph("\\nsupset", true, "default", 10.0, "rm", Metrics::new(8.37890625, 8.21875, 6.390625, 1.0, 7.390625, -1.0, 7.21875, 7.21875, false)),
    glyph("\\nsubseteq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 8.453125, 6.390625, 0.921875, 7.3125, -1.15625, 7.296875, 7.296875, false)),
    glyph("\\nsupseteq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 8.453125, 6.390625, 1.0625, 7.453125, -1.15625, 7.296875, 7.296875, false)),
    glyph("\\subsetneq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.875, 6.390625, 0.921875, 7.3125, -0.734375, 6.140625, 6.140625, false)),
    glyph("\\supsetneq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.875, 6.390625, 0.921875, 7.3125, -0.734375, 6.140625, 6.140625, false)),
    glyph("\\sqsubset", true, "default", 10.0, "rm", Metrics::new(8.37890625, 5.671875, 6.25, 1.0625, 7.3125, 0.0, 5.671875, 5.671875, false)),
    glyph("\\sqsupset", true, "default", 10.0, "rm", Metrics::new(8.37890625, 5.671875, 6.25, 1.0625, 7.3125, 0.0, 5.671875, 5.671875, false)),
    glyph("\\sqsubseteq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.125, 6.25, 1.0625, 7.3125, -0.828125, 6.296875, 6.296875, false)),
    glyph("\\sqsupseteq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.125, 6.25, 1.0625, 7.3125, -0.828125, 6.296875, 6.296875, false)),
    glyph("\\vDash", true, "default", 10.0, "rm", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\Vdash", true, "default", 10.0, "rm", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\Vvdash", true, "default", 10.0, "rm", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\VDash", true, "default", 10.0, "rm", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\nvdash", true, "default", 10.0, "rm", Metrics::new(8.7109375, 7.78125, 7.0, 0.859375, 7.859375, -0.390625, 7.390625, 7.390625, false)),
    glyph("\\nvDash", true, "default", 10.0, "rm", Metrics::new(8.7109375, 7.78125, 7.0, 0.859375, 7.859375, -0.390625, 7.390625, 7.390625, false)),
    glyph("\\nVdash", true, "default", 10.0, "rm", Metrics::new(8.7109375, 7.78125, 7.0, 0.859375, 7.859375, -0.390625, 7.390625, 7.390625, false)),
    glyph("\\nVDash", true, "default", 10.0, "rm", Metrics::new(8.7109375, 7.78125, 7.0, 0.859375, 7.859375, -0.390625, 7.390625, 7.390625, false)),
    glyph("\\vartriangleleft", true, "default", 10.0, "rm", Metrics::new(8.37890625, 5.984375, 6.25, 1.0625, 7.3125, 0.140625, 6.125, 6.125, false)),
    glyph("\\vartriangleright", true, "default", 10.0, "rm", Metrics::new(8.37890625, 5.984375, 6.25, 1.0625, 7.3125, 0.140625, 6.125, 6.125, false)),
    glyph("\\trianglelefteq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.21875, 6.25, 1.0625, 7.3125, -0.484375, 6.734375, 6.734375, false)),
    glyph("\\trianglerighteq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.21875, 6.25, 1.0625, 7.3125, -0.484375, 6.734375, 6.734375, false)),
    glyph("\\multimap", true, "default", 10.0, "rm", Metrics::new(8.37890625, 2.796875, 7.421875, 0.484375, 7.90625, 1.75, 4.546875, 4.546875, false)),
    glyph("\\backsimeq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 3.21875, 6.25, 1.0625, 7.3125, 1.71875, 4.9375, 4.9375, false)),
    glyph("\\Subset", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.328125, 6.390625, 0.921875, 7.3125, -0.03125, 6.296875, 6.296875, false)),
    glyph("\\Supset", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.328125, 6.390625, 1.0625, 7.453125, -0.03125, 6.296875, 6.296875, false)),
    glyph("\\pitchfork", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.296875, 4.671875, 1.859375, 6.53125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\lessdot", true, "default", 10.0, "rm", Metrics::new(8.37890625, 5.359375, 6.25, 1.0625, 7.3125, 0.453125, 5.8125, 5.8125, false)),
    glyph("\\gtrdot", true, "default", 10.0, "rm", Metrics::new(8.37890625, 5.359375, 6.25, 1.0625, 7.3125, 0.453125, 5.8125, 5.8125, false)),
    glyph("\\lll", true, "default", 10.0, "rm", Metrics::new(14.2236328125, 5.875, 12.78125, 0.71875, 13.5, 0.21875, 6.09375, 6.09375, false)),
    glyph("\\ggg", true, "default", 10.0, "rm", Metrics::new(14.2236328125, 5.875, 12.78125, 0.71875, 13.5, 0.21875, 6.09375, 6.09375, false)),
    glyph("\\lesseqgtr", true, "default", 10.0, "rm", Metrics::new(8.37890625, 10.8125, 6.25, 1.0625, 7.3125, -2.28125, 8.53125, 8.53125, false)),
    glyph("\\gtreqless", true, "default", 10.0, "rm", Metrics::new(8.37890625, 10.8125, 6.25, 1.0625, 7.3125, -2.28125, 8.53125, 8.53125, false)),
    glyph("\\curlyeqprec", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.71875, 6.25, 1.0625, 7.3125, -1.046875, 6.671875, 6.671875, false)),
    glyph("\\curlyeqsucc", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.71875, 6.25, 1.0625, 7.3125, -1.046875, 6.671875, 6.671875, false)),
    glyph("\\npreccurlyeq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 9.421875, 6.25, 1.0625, 7.3125, -1.78125, 7.640625, 7.640625, false)),
    glyph("\\nsucccurlyeq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 9.421875, 6.25, 1.0625, 7.3125, -1.78125, 7.640625, 7.640625, false)),
    glyph("\\nsqsubseteq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 9.078125, 6.25, 1.0625, 7.3125, -1.40625, 7.671875, 7.671875, false)),
    glyph("\\nsqsupseteq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 9.078125, 6.25, 1.0625, 7.3125, -1.40625, 7.671875, 7.671875, false)),
    glyph("\\lnsim", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.203125, 6.265625, 1.0625, 7.328125, -1.375, 5.828125, 5.828125, false)),
    glyph("\\gnsim", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.203125, 6.265625, 1.0625, 7.328125, -1.375, 5.828125, 5.828125, false)),
    glyph("\\precnsim", true, "default", 10.0, "rm", Metrics::new(8.37890625, 8.359375, 6.25, 1.0625, 7.3125, -1.6875, 6.671875, 6.671875, false)),
    glyph("\\succnsim", true, "default", 10.0, "rm", Metrics::new(8.37890625, 8.375, 6.265625, 1.09375, 7.359375, -1.703125, 6.671875, 6.671875, false)),
    glyph("\\ntriangleleft", true, "default", 10.0, "rm", Metrics::new(8.37890625, 8.859375, 6.25, 1.0625, 7.3125, -1.296875, 7.5625, 7.5625, false)),
    glyph("\\ntriangleright", true, "default", 10.0, "rm", Metrics::new(8.37890625, 8.859375, 6.25, 1.0625, 7.3125, -1.296875, 7.5625, 7.5625, false)),
    glyph("\\ntrianglelefteq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 10.046875, 6.25, 1.0625, 7.3125, -1.890625, 8.15625, 8.15625, false)),
    glyph("\\ntrianglerighteq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 10.046875, 6.25, 1.046875, 7.296875, -1.890625, 8.15625, 8.15625, false)),
    glyph("\\leqslant", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.046875, 6.25, 1.0625, 7.3125, -1.234375, 5.8125, 5.8125, false)),
    glyph("\\geqslant", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.046875, 6.25, 1.0625, 7.3125, -1.234375, 5.8125, 5.8125, false)),
    glyph("\\lessapprox", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.953125, 6.265625, 1.0625, 7.328125, -1.328125, 6.625, 6.625, false)),
    glyph("\\gtrapprox", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.953125, 6.265625, 1.0625, 7.328125, -1.328125, 6.625, 6.625, false)),
    glyph("\\lneq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.03125, 6.25, 1.0625, 7.3125, -1.203125, 5.828125, 5.828125, false)),
    glyph("\\gneq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.03125, 6.25, 1.0625, 7.3125, -1.203125, 5.828125, 5.828125, false)),
    glyph("\\lnapprox", true, "default", 10.0, "rm", Metrics::new(8.37890625, 8.65625, 6.265625, 1.0625, 7.328125, -2.03125, 6.625, 6.625, false)),
    glyph("\\gnapprox", true, "default", 10.0, "rm", Metrics::new(8.37890625, 8.65625, 6.265625, 1.0625, 7.328125, -2.03125, 6.625, 6.625, false)),
    glyph("\\lesseqqgtr", true, "default", 10.0, "rm", Metrics::new(8.37890625, 11.015625, 6.25, 1.0625, 7.3125, -3.109375, 7.90625, 7.90625, false)),
    glyph("\\gtreqqless", true, "default", 10.0, "rm", Metrics::new(8.37890625, 11.015625, 6.25, 1.0625, 7.3125, -3.109375, 7.90625, 7.90625, false)),
    glyph("\\eqslantless", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.046875, 6.25, 1.0625, 7.3125, -0.609375, 6.4375, 6.4375, false)),
    glyph("\\eqslantgtr", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.046875, 6.25, 1.0625, 7.3125, -0.609375, 6.4375, 6.4375, false)),
    glyph("\\preceq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.90625, 6.25, 1.0625, 7.3125, -0.234375, 6.671875, 6.671875, false)),
    glyph("\\succeq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.90625, 6.25, 1.0625, 7.3125, -0.234375, 6.671875, 6.671875, false)),
    glyph("\\precneqq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 8.5625, 6.25, 1.0625, 7.3125, -1.953125, 6.609375, 6.609375, false)),
    glyph("\\succneqq", true, "default", 10.0, "rm", Metrics::new(8.37890625, 8.5625, 6.25, 1.0625, 7.3125, -1.953125, 6.609375, 6.609375, false)),
    glyph("\\precapprox", true, "default", 10.0, "rm", Metrics::new(8.37890625, 8.828125, 6.25, 1.0625, 7.3125, -1.90625, 6.921875, 6.921875, false)),
    glyph("\\succapprox", true, "default", 10.0, "rm", Metrics::new(8.37890625, 8.828125, 6.25, 1.0625, 7.3125, -1.90625, 6.921875, 6.921875, false)),
    glyph("\\precnapprox", true, "default", 10.0, "rm", Metrics::new(8.37890625, 9.515625, 6.265625, 1.0625, 7.328125, -2.59375, 6.921875, 6.921875, false)),
    glyph("\\succnapprox", true, "default", 10.0, "rm", Metrics::new(8.37890625, 9.515625, 6.265625, 1.0625, 7.328125, -2.59375, 6.921875, 6.921875, false)),
    glyph("\\dotplus", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.296875, 6.25, 1.0625, 7.3125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\smallsetminus", true, "default", 10.0, "rm", Metrics::new(6.3671875, 8.21875, 3.375, 1.921875, 5.296875, -0.53125, 7.6875, 7.6875, false)),
    glyph("\\dotminus", true, "default", 10.0, "rm", Metrics::new(8.37890625, 2.796875, 6.25, 1.0625, 7.3125, 2.71875, 5.515625, 5.515625, false)),
    glyph("\\cupdot", true, "default", 10.0, "rm", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\circledcirc", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\circledast", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\circleddash", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\boxplus", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\boxminus", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\boxtimes", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\boxdot", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\intercal", true, "default", 10.0, "rm", Metrics::new(5.205078125, 7.0, 2.890625, 1.15625, 4.046875, 0.0, 7.0, 7.0, false)),
    glyph("\\veebar", true, "default", 10.0, "rm", Metrics::new(7.3193359375, 7.40625, 5.359375, 0.984375, 6.34375, 0.0, 7.40625, 7.40625, false)),
    glyph("\\barwedge", true, "default", 10.0, "rm", Metrics::new(7.3193359375, 7.40625, 5.359375, 0.984375, 6.34375, 0.0, 7.40625, 7.40625, false)),
    glyph("\\barvee", true, "default", 10.0, "rm", Metrics::new(7.3193359375, 7.40625, 5.359375, 0.984375, 6.34375, 0.0, 7.40625, 7.40625, false)),
    glyph("\\divideontimes", true, "default", 10.0, "rm", Metrics::new(8.37890625, 5.984375, 6.25, 1.0625, 7.3125, 0.140625, 6.125, 6.125, false)),
    glyph("\\ltimes", true, "default", 10.0, "rm", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\rtimes", true, "default", 10.0, "rm", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\leftthreetimes", true, "default", 10.0, "rm", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\rightthreetimes", true, "default", 10.0, "rm", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\curlyvee", true, "default", 10.0, "rm", Metrics::new(7.32421875, 5.796875, 6.359375, 0.484375, 6.84375, 0.0, 5.796875, 5.796875, false)),
    glyph("\\curlywedge", true, "default", 10.0, "rm", Metrics::new(7.32421875, 5.796875, 6.359375, 0.484375, 6.84375, 0.0, 5.796875, 5.796875, false)),
    glyph("\\Cap", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.625, 6.328125, 1.03125, 7.359375, 0.0, 6.625, 6.625, false)),
    glyph("\\Cup", true, "default", 10.0, "rm", Metrics::new(8.37890625, 6.625, 6.328125, 1.03125, 7.359375, -0.140625, 6.484375, 6.484375, false)),
    glyph("\\doublebarwedge", true, "default", 10.0, "rm", Metrics::new(8.37890625, 5.125, 4.28125, 2.046875, 6.328125, 0.0, 5.125, 5.125, false)),
    glyph("\\bigodot", true, "default", 10.0, "rm", Metrics::new(10.0, 9.453125, 9.4375, 0.28125, 9.71875, -1.984375, 7.46875, 7.46875, false)),
    glyph("\\oiint", true, "default", 10.0, "rm", Metrics::new(7.890625, 9.6875, 6.734375, 0.578125, 7.3125, -2.125, 7.5625, 7.5625, false)),
    glyph("\\oiiint", true, "default", 10.0, "rm", Metrics::new(10.5712890625, 9.6875, 9.421875, 0.578125, 10.0, -2.125, 7.5625, 7.5625, false)),
    glyph("\\iiiint", true, "default", 10.0, "rm", Metrics::new(13.251953125, 9.6875, 12.109375, 0.578125, 12.6875, -2.125, 7.5625, 7.5625, false)),
    glyph("\\minus", true, "default", 10.0, "rm", Metrics::new(8.37890625, 0.828125, 6.25, 1.0625, 7.3125, 2.71875, 3.546875, 3.546875, false)),
    glyph("\\cdotp", true, "default", 10.0, "rm", Metrics::new(3.1787109375, 1.234375, 1.03125, 1.0625, 2.09375, 2.859375, 4.09375, 4.09375, false)),
    glyph("\\hslash", true, "default", 10.0, "rm", Metrics::new(6.337890625, 7.59375, 5.4375, 0.4375, 5.875, 0.0, 7.59375, 7.59375, false)),
    glyph("\\beth", true, "default", 10.0, "rm", Metrics::new(6.73828125, 7.5625, 6.5625, -0.03125, 6.53125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\gimel", true, "default", 10.0, "rm", Metrics::new(4.658203125, 7.765625, 3.9375, 0.125, 4.0625, -0.34375, 7.421875, 7.421875, false)),
    glyph("\\daleth", true, "default", 10.0, "rm", Metrics::new(6.4453125, 7.765625, 5.484375, 0.421875, 5.90625, -0.34375, 7.421875, 7.421875, false)),
    glyph("\\mho", true, "default", 10.0, "rm", Metrics::new(7.6416015625, 7.375, 6.890625, 0.375, 7.265625, -0.140625, 7.234375, 7.234375, false)),
    glyph("\\eth", true, "default", 10.0, "rm", Metrics::new(6.1181640625, 7.734375, 5.03125, 0.546875, 5.578125, -0.140625, 7.59375, 7.59375, false)),
    glyph("\\Finv", true, "default", 10.0, "rm", Metrics::new(5.751953125, 7.296875, 4.1875, 0.984375, 5.171875, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Game", true, "default", 10.0, "rm", Metrics::new(7.7490234375, 7.5625, 6.359375, 0.796875, 7.15625, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\digamma", true, "default", 10.0, "rm", Metrics::new(4.5849609375, 9.671875, 5.03125, -0.9375, 4.09375, -2.078125, 7.59375, 7.59375, false)),
    glyph("\\varkappa", true, "default", 10.0, "rm", Metrics::new(6.6357421875, 5.5625, 5.453125, 0.546875, 6.0, -0.0625, 5.5, 5.5, false)),
    glyph("\\backepsilon", true, "default", 10.0, "rm", Metrics::new(6.15234375, 5.734375, 4.25, 0.953125, 5.203125, -0.140625, 5.59375, 5.59375, false)),
    glyph("\\AA", true, "default", 10.0, "rm", Metrics::new(6.8408203125, 9.28125, 6.6875, 0.078125, 6.765625, 0.0, 9.28125, 9.28125, false)),
    glyph("\\ae", true, "default", 10.0, "rm", Metrics::new(9.8193359375, 5.734375, 8.703125, 0.59375, 9.296875, -0.140625, 5.59375, 5.59375, false)),
    glyph("\\AE", true, "default", 10.0, "rm", Metrics::new(9.7412109375, 7.296875, 9.0625, 0.046875, 9.109375, 0.0, 7.296875, 7.296875, false)),
    glyph("\\oe", true, "default", 10.0, "rm", Metrics::new(10.2294921875, 5.734375, 9.15625, 0.546875, 9.703125, -0.140625, 5.59375, 5.59375, false)),
    glyph("\\OE", true, "default", 10.0, "rm", Metrics::new(10.6982421875, 7.296875, 9.5, 0.5625, 10.0625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\o", true, "default", 10.0, "rm", Metrics::new(6.1181640625, 6.375, 5.40625, 0.359375, 5.765625, -0.453125, 5.921875, 5.921875, false)),
    glyph("\\O", true, "default", 10.0, "rm", Metrics::new(7.87109375, 7.953125, 6.875, 0.5, 7.375, -0.34375, 7.609375, 7.609375, false)),
    glyph("\\ss", true, "default", 10.0, "rm", Metrics::new(6.298828125, 7.734375, 4.9375, 0.90625, 5.84375, -0.140625, 7.59375, 7.59375, false)),
    glyph("\\l", true, "default", 10.0, "rm", Metrics::new(2.841796875, 7.59375, 2.84375, 0.015625, 2.859375, 0.0, 7.59375, 7.59375, false)),
    glyph("\\L", true, "default", 10.0, "rm", Metrics::new(5.6201171875, 7.296875, 5.640625, -0.0625, 5.578125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\complement", true, "default", 10.0, "rm", Metrics::new(6.3623046875, 7.5625, 4.875, 0.65625, 5.53125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\nexists", true, "default", 10.0, "rm", Metrics::new(6.318359375, 8.21875, 4.6875, 0.984375, 5.671875, -0.453125, 7.765625, 7.765625, false)),
    glyph("\\varnothing", true, "default", 10.0, "rm", Metrics::new(8.7109375, 7.1875, 7.203125, 0.75, 7.953125, -0.09375, 7.09375, 7.09375, false)),
    glyph("\\smallin", true, "default", 10.0, "rm", Metrics::new(7.177734375, 4.75, 5.0625, 1.0625, 6.125, 0.75, 5.5, 5.5, false)),
    glyph("\\QED", true, "default", 10.0, "rm", Metrics::new(6.3623046875, 4.859375, 3.421875, 1.46875, 4.890625, 0.0, 4.859375, 4.859375, false)),
    glyph("\\measuredangle", true, "default", 10.0, "rm", Metrics::new(8.96484375, 7.828125, 7.0, 0.859375, 7.859375, -0.53125, 7.296875, 7.296875, false)),
    glyph("\\sphericalangle", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.296875, 6.171875, 1.15625, 7.328125, -0.03125, 7.265625, 7.265625, false)),
    glyph("\\rightangle", true, "default", 10.0, "rm", Metrics::new(8.37890625, 5.625, 5.625, 1.375, 7.0, 0.984375, 6.609375, 6.609375, false)),
    glyph("\\therefore", true, "default", 10.0, "rm", Metrics::new(6.3623046875, 5.046875, 5.171875, 0.59375, 5.765625, 1.0, 6.046875, 6.046875, false)),
    glyph("\\because", true, "default", 10.0, "rm", Metrics::new(6.3623046875, 5.046875, 5.171875, 0.59375, 5.765625, 1.0, 6.046875, 6.046875, false)),
    glyph("\\Colon", true, "default", 10.0, "rm", Metrics::new(6.3623046875, 5.046875, 5.171875, 0.59375, 5.765625, 1.0, 6.046875, 6.046875, false)),
    glyph("\\lnot", true, "default", 10.0, "rm", Metrics::new(8.37890625, 2.796875, 6.25, 1.0625, 7.3125, 1.40625, 4.203125, 4.203125, false)),
    glyph("\\sqrt", true, "default", 10.0, "rm", Metrics::new(6.3720703125, 8.3125, 6.078125, 0.296875, 6.375, -0.203125, 8.109375, 8.109375, false)),
    glyph("\\dots", true, "default", 10.0, "rm", Metrics::new(10.0, 1.234375, 7.6875, 1.15625, 8.84375, 0.0, 1.234375, 1.234375, false)),
    glyph("\\adots", true, "default", 10.0, "rm", Metrics::new(10.0, 8.078125, 7.6875, 1.15625, 8.84375, -0.921875, 7.15625, 7.15625, false)),
    glyph("\\ulcorner", true, "default", 10.0, "rm", Metrics::new(4.6875, 3.34375, 3.171875, 0.859375, 4.03125, 4.25, 7.59375, 7.59375, false)),
    glyph("\\urcorner", true, "default", 10.0, "rm", Metrics::new(4.6875, 3.34375, 3.171875, 0.65625, 3.828125, 4.25, 7.59375, 7.59375, false)),
    glyph("\\llcorner", true, "default", 10.0, "rm", Metrics::new(4.6875, 3.34375, 3.171875, 0.859375, 4.03125, -0.703125, 2.640625, 2.640625, false)),
    glyph("\\lrcorner", true, "default", 10.0, "rm", Metrics::new(4.6875, 3.34375, 3.171875, 0.65625, 3.828125, -0.703125, 2.640625, 2.640625, false)),
    glyph("\\lbrack", true, "default", 10.0, "rm", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.859375, 2.9375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rbrack", true, "default", 10.0, "rm", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.96875, 3.046875, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\leftparen", true, "default", 10.0, "rm", Metrics::new(3.9013671875, 8.90625, 2.234375, 0.859375, 3.09375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rightparen", true, "default", 10.0, "rm", Metrics::new(3.9013671875, 8.90625, 2.25, 0.796875, 3.046875, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\bigtriangleup", true, "default", 10.0, "rm", Metrics::new(7.6904296875, 7.65625, 7.625, 0.03125, 7.65625, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\vartriangle", true, "default", 10.0, "rm", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\blacktriangle", true, "default", 10.0, "rm", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\triangleright", true, "default", 10.0, "rm", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\blacktriangleright", true, "default", 10.0, "rm", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\bigtriangledown", true, "default", 10.0, "rm", Metrics::new(7.6904296875, 7.65625, 7.625, 0.03125, 7.65625, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\triangledown", true, "default", 10.0, "rm", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\blacktriangledown", true, "default", 10.0, "rm", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\triangleleft", true, "default", 10.0, "rm", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\blacktriangleleft", true, "default", 10.0, "rm", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\lozenge", true, "default", 10.0, "rm", Metrics::new(4.94140625, 10.40625, 4.875, 0.03125, 4.90625, -2.328125, 8.078125, 8.078125, false)),
    glyph("\\blacksquare", true, "default", 10.0, "rm", Metrics::new(9.4482421875, 7.65625, 7.640625, 0.90625, 8.546875, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\square", true, "default", 10.0, "rm", Metrics::new(9.4482421875, 7.65625, 7.640625, 0.90625, 8.546875, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\Box", true, "default", 10.0, "rm", Metrics::new(9.4482421875, 7.65625, 7.640625, 0.90625, 8.546875, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\bigstar", true, "default", 10.0, "rm", Metrics::new(8.96484375, 7.28125, 7.65625, 0.65625, 8.3125, -0.046875, 7.234375, 7.234375, false)),
    glyph("\\diagup", true, "default", 10.0, "rm", Metrics::new(6.0205078125, 11.6875, 6.890625, -0.4375, 6.453125, -2.40625, 9.28125, 9.28125, false)),
    glyph("\\diagdown", true, "default", 10.0, "rm", Metrics::new(6.0205078125, 11.6875, 6.890625, -0.4375, 6.453125, -2.40625, 9.28125, 9.28125, false)),
    glyph("\\varspadesuit", true, "default", 10.0, "rm", Metrics::new(8.96484375, 7.296875, 5.8125, 1.578125, 7.390625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\varheartsuit", true, "default", 10.0, "rm", Metrics::new(8.96484375, 7.28125, 7.1875, 0.890625, 8.078125, 0.0, 7.28125, 7.28125, false)),
    glyph("\\vardiamondsuit", true, "default", 10.0, "rm", Metrics::new(8.96484375, 7.28125, 5.59375, 1.6875, 7.28125, 0.0, 7.28125, 7.28125, false)),
    glyph("\\varclubsuit", true, "default", 10.0, "rm", Metrics::new(8.96484375, 7.328125, 6.75, 1.109375, 7.859375, 0.0, 7.328125, 7.328125, false)),
    glyph("\\checkmark", true, "default", 10.0, "rm", Metrics::new(8.37890625, 5.328125, 5.171875, 1.5, 6.671875, 0.96875, 6.296875, 6.296875, false)),
    glyph("\\maltese", true, "default", 10.0, "rm", Metrics::new(8.37890625, 7.296875, 7.28125, 0.546875, 7.828125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\sun", true, "default", 10.0, "rm", Metrics::new(8.96484375, 7.3125, 7.3125, 0.828125, 8.140625, 0.0, 7.3125, 7.3125, false)),
    glyph("\\mercury", true, "default", 10.0, "rm", Metrics::new(6.1376953125, 8.328125, 4.421875, 0.859375, 5.28125, -1.015625, 7.3125, 7.3125, false)),
    glyph("\\venus", true, "default", 10.0, "rm", Metrics::new(7.32421875, 8.5625, 5.609375, 0.859375, 6.46875, -1.25, 7.3125, 7.3125, false)),
    glyph("\\earth", true, "default", 10.0, "rm", Metrics::new(7.32421875, 8.5625, 5.609375, 0.859375, 6.46875, -0.140625, 8.421875, 8.421875, false)),
    glyph("\\mars", true, "default", 10.0, "rm", Metrics::new(8.96484375, 7.34375, 7.515625, 0.796875, 8.3125, -0.140625, 7.203125, 7.203125, false)),
    glyph("\\jupiter", true, "default", 10.0, "rm", Metrics::new(8.96484375, 7.3125, 5.640625, 1.65625, 7.296875, 0.0, 7.3125, 7.3125, false)),
    glyph("\\saturn", true, "default", 10.0, "rm", Metrics::new(8.96484375, 7.3125, 4.578125, 2.1875, 6.765625, 0.0, 7.3125, 7.3125, false)),
    glyph("\\uranus", true, "default", 10.0, "rm", Metrics::new(8.96484375, 7.3125, 6.53125, 1.21875, 7.75, 0.0, 7.3125, 7.3125, false)),
    glyph("\\neptune", true, "default", 10.0, "rm", Metrics::new(8.96484375, 7.3125, 6.421875, 1.265625, 7.6875, 0.0, 7.3125, 7.3125, false)),
    glyph("\\pluto", true, "default", 10.0, "rm", Metrics::new(8.96484375, 7.3125, 4.15625, 2.40625, 6.5625, 0.0, 7.3125, 7.3125, false)),
    glyph("\\male", true, "default", 10.0, "rm", Metrics::new(8.96484375, 7.34375, 7.515625, 0.796875, 8.3125, -0.140625, 7.203125, 7.203125, false)),
    glyph("\\female", true, "default", 10.0, "rm", Metrics::new(7.32421875, 8.5625, 5.609375, 0.859375, 6.46875, -1.25, 7.3125, 7.3125, false)),
    glyph("\\circledR", true, "default", 10.0, "rm", Metrics::new(10.0, 7.25, 7.25, 1.375, 8.625, 0.0, 7.25, 7.25, false)),
    glyph("\\yen", true, "default", 10.0, "rm", Metrics::new(6.3623046875, 7.296875, 5.546875, 0.40625, 5.953125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\sterling", true, "default", 10.0, "rm", Metrics::new(6.3623046875, 7.421875, 4.859375, 0.625, 5.484375, 0.0, 7.421875, 7.421875, false)),
    glyph("\\cent", true, "default", 10.0, "rm", Metrics::new(6.3623046875, 8.53125, 4.328125, 0.84375, 5.171875, -1.53125, 7.0, 7.0, false)),
    glyph("\\backprime", true, "default", 10.0, "rm", Metrics::new(2.2705078125, 1.828125, 1.828125, 0.203125, 2.03125, 5.46875, 7.296875, 7.296875, false)),
    glyph("\\dag", true, "default", 10.0, "rm", Metrics::new(5.0, 8.265625, 4.4375, 0.28125, 4.71875, -0.96875, 7.296875, 7.296875, false)),
    glyph("\\ddag", true, "default", 10.0, "rm", Metrics::new(5.0, 8.265625, 4.4375, 0.28125, 4.71875, -0.96875, 7.296875, 7.296875, false)),
    glyph("é", true, "default", 10.0, "rm", Metrics::new(6.15234375, 8.140625, 5.078125, 0.546875, 5.625, -0.140625, 8.0, 8.0, false)),
    glyph(" ", true, "default", 10.0, "rm", Metrics::new(3.1787109375, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, false)),
    glyph("a", true, "default", 12.0, "rm", Metrics::new(7.353515625, 6.890625, 5.546875, 0.71875, 6.265625, -0.171875, 6.71875, 6.71875, false)),
    glyph("b", true, "default", 12.0, "rm", Metrics::new(7.6171875, 9.296875, 5.875, 1.09375, 6.96875, -0.171875, 9.125, 9.125, false)),
    glyph("c", true, "default", 12.0, "rm", Metrics::new(6.59765625, 6.890625, 5.203125, 0.65625, 5.859375, -0.171875, 6.71875, 6.71875, false)),
    glyph("d", true, "default", 12.0, "rm", Metrics::new(7.6171875, 9.296875, 5.875, 0.65625, 6.53125, -0.171875, 9.125, 9.125, false)),
    glyph("e", true, "default", 12.0, "rm", Metrics::new(7.3828125, 6.890625, 6.09375, 0.65625, 6.75, -0.171875, 6.71875, 6.71875, false)),
    glyph("f", true, "default", 12.0, "rm", Metrics::new(4.224609375, 9.125, 4.171875, 0.28125, 4.453125, 0.0, 9.125, 9.125, false)),
    glyph("g", true, "default", 12.0, "rm", Metrics::new(7.6171875, 9.21875, 5.875, 0.65625, 6.53125, -2.5, 6.71875, 6.71875, false)),
    glyph("h", true, "default", 12.0, "rm", Metrics::new(7.60546875, 9.125, 5.5, 1.09375, 6.59375, 0.0, 9.125, 9.125, false)),
    glyph("i", true, "default", 12.0, "rm", Metrics::new(3.333984375, 9.125, 1.078125, 1.125, 2.203125, 0.0, 9.125, 9.125, false)),
    glyph("j", true, "default", 12.0, "rm", Metrics::new(3.333984375, 11.625, 2.421875, -0.21875, 2.203125, -2.5, 9.125, 9.125, false)),
    glyph("k", true, "default", 12.0, "rm", Metrics::new(6.94921875, 9.125, 5.828125, 1.09375, 6.921875, 0.0, 9.125, 9.125, false)),
    glyph("l", true, "default", 12.0, "rm", Metrics::new(3.333984375, 9.125, 1.078125, 1.125, 2.203125, 0.0, 9.125, 9.125, false)),
    glyph("m", true, "default", 12.0, "rm", Metrics::new(11.689453125, 6.71875, 9.578125, 1.09375, 10.671875, 0.0, 6.71875, 6.71875, false)),
    glyph("n", true, "default", 12.0, "rm", Metrics::new(7.60546875, 6.71875, 5.5, 1.09375, 6.59375, 0.0, 6.71875, 6.71875, false)),
    glyph("o", true, "default", 12.0, "rm", Metrics::new(7.341796875, 6.890625, 6.03125, 0.65625, 6.6875, -0.171875, 6.71875, 6.71875, false)),
    glyph("p", true, "default", 12.0, "rm", Metrics::new(7.6171875, 9.21875, 5.875, 1.09375, 6.96875, -2.5, 6.71875, 6.71875, false)),
    glyph("q", true, "default", 12.0, "rm", Metrics::new(7.6171875, 9.21875, 5.875, 0.65625, 6.53125, -2.5, 6.71875, 6.71875, false)),
    glyph("r", true, "default", 12.0, "rm", Metrics::new(4.93359375, 6.71875, 3.84375, 1.09375, 4.9375, 0.0, 6.71875, 6.71875, false)),
    glyph("s", true, "default", 12.0, "rm", Metrics::new(6.251953125, 6.890625, 5.015625, 0.65625, 5.671875, -0.171875, 6.71875, 6.71875, false)),
    glyph("t", true, "default", 12.0, "rm", Metrics::new(4.705078125, 8.421875, 4.09375, 0.328125, 4.421875, 0.0, 8.421875, 8.421875, false)),
    glyph("u", true, "default", 12.0, "rm", Metrics::new(7.60546875, 6.890625, 5.5, 1.015625, 6.515625, -0.171875, 6.71875, 6.71875, false)),
    glyph("v", true, "default", 12.0, "rm", Metrics::new(7.1015625, 6.5625, 6.390625, 0.359375, 6.75, 0.0, 6.5625, 6.5625, false)),
    glyph("w", true, "default", 12.0, "rm", Metrics::new(9.814453125, 6.5625, 8.8125, 0.5, 9.3125, 0.0, 6.5625, 6.5625, false)),
    glyph("x", true, "default", 12.0, "rm", Metrics::new(7.1015625, 6.5625, 6.359375, 0.34375, 6.703125, 0.0, 6.5625, 6.5625, false)),
    glyph("y", true, "default", 12.0, "rm", Metrics::new(7.1015625, 9.0625, 6.390625, 0.359375, 6.75, -2.5, 6.5625, 6.5625, false)),
    glyph("z", true, "default", 12.0, "rm", Metrics::new(6.298828125, 6.5625, 5.265625, 0.515625, 5.78125, 0.0, 6.5625, 6.5625, false)),
    glyph("A", true, "default", 12.0, "rm", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("B", true, "default", 12.0, "rm", Metrics::new(8.232421875, 8.75, 6.21875, 1.171875, 7.390625, 0.0, 8.75, 8.75, false)),
    glyph("C", true, "default", 12.0, "rm", Metrics::new(8.37890625, 9.078125, 7.0625, 0.671875, 7.734375, -0.171875, 8.90625, 8.90625, false)),
    glyph("D", true, "default", 12.0, "rm", Metrics::new(9.240234375, 8.75, 7.359375, 1.171875, 8.53125, 0.0, 8.75, 8.75, false)),
    glyph("E", true, "default", 12.0, "rm", Metrics::new(7.58203125, 8.75, 5.640625, 1.171875, 6.8125, 0.0, 8.75, 8.75, false)),
    glyph("F", true, "default", 12.0, "rm", Metrics::new(6.90234375, 8.75, 5.03125, 1.171875, 6.203125, 0.0, 8.75, 8.75, false)),
    glyph("G", true, "default", 12.0, "rm", Metrics::new(9.298828125, 9.078125, 7.640625, 0.671875, 8.3125, -0.171875, 8.90625, 8.90625, false)),
    glyph("H", true, "default", 12.0, "rm", Metrics::new(9.0234375, 8.75, 6.671875, 1.171875, 7.84375, 0.0, 8.75, 8.75, false)),
    glyph("I", true, "default", 12.0, "rm", Metrics::new(3.5390625, 8.75, 1.1875, 1.171875, 2.359375, 0.0, 8.75, 8.75, false)),
    glyph("J", true, "default", 12.0, "rm", Metrics::new(3.5390625, 11.15625, 2.984375, -0.625, 2.359375, -2.40625, 8.75, 8.75, false)),
    glyph("K", true, "default", 12.0, "rm", Metrics::new(7.869140625, 8.75, 6.953125, 1.171875, 8.125, 0.0, 8.75, 8.75, false)),
    glyph("L", true, "default", 12.0, "rm", Metrics::new(6.685546875, 8.75, 5.453125, 1.171875, 6.625, 0.0, 8.75, 8.75, false)),
    glyph("M", true, "default", 12.0, "rm", Metrics::new(10.353515625, 8.75, 8.015625, 1.171875, 9.1875, 0.0, 8.75, 8.75, false)),
    glyph("N", true, "default", 12.0, "rm", Metrics::new(8.9765625, 8.75, 6.625, 1.171875, 7.796875, 0.0, 8.75, 8.75, false)),
    glyph("O", true, "default", 12.0, "rm", Metrics::new(9.4453125, 9.078125, 8.09375, 0.671875, 8.765625, -0.171875, 8.90625, 8.90625, false)),
    glyph("P", true, "default", 12.0, "rm", Metrics::new(7.236328125, 8.75, 5.65625, 1.171875, 6.828125, 0.0, 8.75, 8.75, false)),
    glyph("Q", true, "default", 12.0, "rm", Metrics::new(9.4453125, 10.453125, 8.09375, 0.671875, 8.765625, -1.546875, 8.90625, 8.90625, false)),
    glyph("R", true, "default", 12.0, "rm", Metrics::new(8.337890625, 8.75, 6.828125, 1.171875, 8.0, 0.0, 8.75, 8.75, false)),
    glyph("S", true, "default", 12.0, "rm", Metrics::new(7.6171875, 9.078125, 6.15625, 0.796875, 6.953125, -0.171875, 8.90625, 8.90625, false)),
    glyph("T", true, "default", 12.0, "rm", Metrics::new(7.330078125, 8.75, 7.390625, -0.03125, 7.359375, 0.0, 8.75, 8.75, false)),
    glyph("U", true, "default", 12.0, "rm", Metrics::new(8.783203125, 8.921875, 6.6875, 1.046875, 7.734375, -0.171875, 8.75, 8.75, false)),
    glyph("V", true, "default", 12.0, "rm", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("W", true, "default", 12.0, "rm", Metrics::new(11.865234375, 8.75, 11.0625, 0.40625, 11.46875, 0.0, 8.75, 8.75, false)),
    glyph("X", true, "default", 12.0, "rm", Metrics::new(8.220703125, 8.75, 7.484375, 0.359375, 7.84375, 0.0, 8.75, 8.75, false)),
    glyph("Y", true, "default", 12.0, "rm", Metrics::new(7.330078125, 8.75, 7.375, -0.015625, 7.359375, 0.0, 8.75, 8.75, false)),
    glyph("Z", true, "default", 12.0, "rm", Metrics::new(8.220703125, 8.75, 7.140625, 0.546875, 7.6875, 0.0, 8.75, 8.75, false)),
    glyph("\\alpha", true, "default", 12.0, "rm", Metrics::new(7.91015625, 6.84375, 6.6875, 0.65625, 7.34375, -0.140625, 6.703125, 6.703125, false)),
    glyph("\\beta", true, "default", 12.0, "rm", Metrics::new(7.658203125, 11.6875, 5.671875, 1.125, 6.796875, -2.5, 9.1875, 9.1875, false)),
    glyph("\\gamma", true, "default", 12.0, "rm", Metrics::new(7.1015625, 9.0625, 6.5625, 0.1875, 6.75, -2.5, 6.5625, 6.5625, false)),
    glyph("\\delta", true, "default", 12.0, "rm", Metrics::new(7.341796875, 9.078125, 6.03125, 0.65625, 6.6875, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\epsilon", true, "default", 12.0, "rm", Metrics::new(7.3828125, 6.890625, 5.109375, 0.65625, 5.765625, -0.171875, 6.71875, 6.71875, false)),
    glyph("\\varepsilon", true, "default", 12.0, "rm", Metrics::new(6.486328125, 6.90625, 4.890625, 0.78125, 5.671875, -0.171875, 6.734375, 6.734375, false)),
    glyph("\\zeta", true, "default", 12.0, "rm", Metrics::new(6.52734375, 11.640625, 5.328125, 0.625, 5.953125, -2.515625, 9.125, 9.125, false)),
    glyph("\\eta", true, "default", 12.0, "rm", Metrics::new(7.60546875, 9.21875, 5.5, 1.09375, 6.59375, -2.5, 6.71875, 6.71875, false)),
    glyph("\\theta", true, "default", 12.0, "rm", Metrics::new(7.341796875, 9.359375, 6.03125, 0.65625, 6.6875, -0.140625, 9.21875, 9.21875, false)),
    glyph("\\vartheta", true, "default", 12.0, "rm", Metrics::new(7.4296875, 9.359375, 6.03125, 0.65625, 6.6875, -0.140625, 9.21875, 9.21875, false)),
    glyph("\\iota", true, "default", 12.0, "rm", Metrics::new(4.060546875, 6.5625, 2.671875, 0.96875, 3.640625, 0.0, 6.5625, 6.5625, false)),
    glyph("\\kappa", true, "default", 12.0, "rm", Metrics::new(7.072265625, 6.5625, 5.65625, 1.125, 6.78125, 0.0, 6.5625, 6.5625, false)),
    glyph("\\lambda", true, "default", 12.0, "rm", Metrics::new(7.1015625, 9.125, 6.390625, 0.359375, 6.75, 0.0, 9.125, 9.125, false)),
    glyph("\\mu", true, "default", 12.0, "rm", Metrics::new(7.634765625, 9.0625, 6.328125, 1.015625, 7.34375, -2.5, 6.5625, 6.5625, false)),
    glyph("\\nu", true, "default", 12.0, "rm", Metrics::new(6.703125, 6.5625, 5.703125, 0.4375, 6.140625, 0.0, 6.5625, 6.5625, false)),
    glyph("\\xi", true, "default", 12.0, "rm", Metrics::new(6.69140625, 11.640625, 5.375, 0.625, 6.0, -2.515625, 9.125, 9.125, false)),
    glyph("\\pi", true, "default", 12.0, "rm", Metrics::new(7.224609375, 6.796875, 6.453125, 0.4375, 6.890625, -0.234375, 6.5625, 6.5625, false)),
    glyph("\\varpi", true, "default", 12.0, "rm", Metrics::new(10.048828125, 6.734375, 9.265625, 0.375, 9.640625, -0.171875, 6.5625, 6.5625, false)),
    glyph("\\rho", true, "default", 12.0, "rm", Metrics::new(7.6171875, 9.21875, 5.875, 1.09375, 6.96875, -2.5, 6.71875, 6.71875, false)),
    glyph("\\varrho", true, "default", 12.0, "rm", Metrics::new(7.6171875, 9.21875, 5.875, 1.09375, 6.96875, -2.5, 6.71875, 6.71875, false)),
    glyph("\\sigma", true, "default", 12.0, "rm", Metrics::new(7.60546875, 6.734375, 6.59375, 0.65625, 7.25, -0.171875, 6.5625, 6.5625, false)),
    glyph("\\varsigma", true, "default", 12.0, "rm", Metrics::new(7.04296875, 9.234375, 5.203125, 0.65625, 5.859375, -2.515625, 6.71875, 6.71875, false)),
    glyph("\\tau", true, "default", 12.0, "rm", Metrics::new(7.224609375, 6.5625, 6.046875, 0.59375, 6.640625, 0.0, 6.5625, 6.5625, false)),
    glyph("\\upsilon", true, "default", 12.0, "rm", Metrics::new(6.943359375, 6.734375, 5.375, 0.875, 6.25, -0.171875, 6.5625, 6.5625, false)),
    glyph("\\phi", true, "default", 12.0, "rm", Metrics::new(7.916015625, 11.625, 6.5625, 0.65625, 7.21875, -2.5, 9.125, 9.125, false)),
    glyph("\\varphi", true, "default", 12.0, "rm", Metrics::new(7.916015625, 9.109375, 6.5625, 0.65625, 7.21875, -2.5, 6.609375, 6.609375, false)),
    glyph("\\chi", true, "default", 12.0, "rm", Metrics::new(6.931640625, 9.0625, 6.25, 0.34375, 6.59375, -2.5, 6.5625, 6.5625, false)),
    glyph("\\psi", true, "default", 12.0, "rm", Metrics::new(7.916015625, 9.0625, 6.5625, 0.65625, 7.21875, -2.5, 6.5625, 6.5625, false)),
    glyph("\\omega", true, "default", 12.0, "rm", Metrics::new(10.048828125, 6.734375, 8.4375, 0.796875, 9.234375, -0.171875, 6.5625, 6.5625, false)),
    glyph("\\Gamma", true, "default", 12.0, "rm", Metrics::new(6.685546875, 8.75, 5.453125, 1.171875, 6.625, 0.0, 8.75, 8.75, false)),
    glyph("\\Delta", true, "default", 12.0, "rm", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("\\Theta", true, "default", 12.0, "rm", Metrics::new(9.4453125, 9.078125, 8.09375, 0.671875, 8.765625, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\Lambda", true, "default", 12.0, "rm", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("\\Xi", true, "default", 12.0, "rm", Metrics::new(7.58203125, 8.75, 5.40625, 1.171875, 6.578125, 0.0, 8.75, 8.75, false)),
    glyph("\\Pi", true, "default", 12.0, "rm", Metrics::new(9.0234375, 8.75, 6.671875, 1.171875, 7.84375, 0.0, 8.75, 8.75, false)),
    glyph("\\Sigma", true, "default", 12.0, "rm", Metrics::new(7.58203125, 8.75, 5.640625, 1.171875, 6.8125, 0.0, 8.75, 8.75, false)),
    glyph("\\Upsilon", true, "default", 12.0, "rm", Metrics::new(7.330078125, 8.75, 7.375, -0.015625, 7.359375, 0.0, 8.75, 8.75, false)),
    glyph("\\Phi", true, "default", 12.0, "rm", Metrics::new(9.4453125, 8.75, 8.09375, 0.671875, 8.765625, 0.0, 8.75, 8.75, false)),
    glyph("\\Psi", true, "default", 12.0, "rm", Metrics::new(9.4453125, 8.75, 8.109375, 0.671875, 8.78125, 0.0, 8.75, 8.75, false)),
    glyph("\\Omega", true, "default", 12.0, "rm", Metrics::new(9.169921875, 8.859375, 8.265625, 0.453125, 8.71875, 0.0, 8.859375, 8.859375, false)),
    glyph("\\sum", true, "default", 12.0, "rm", Metrics::new(8.0859375, 10.921875, 7.703125, 0.140625, 7.84375, -2.296875, 8.625, 8.625, false)),
    glyph("\\prod", true, "default", 12.0, "rm", Metrics::new(9.08203125, 10.921875, 7.234375, 0.921875, 8.15625, -2.296875, 8.625, 8.625, false)),
    glyph("\\coprod", true, "default", 12.0, "rm", Metrics::new(9.08203125, 10.921875, 7.234375, 0.921875, 8.15625, -2.296875, 8.625, 8.625, false)),
    glyph("\\int", true, "default", 12.0, "rm", Metrics::new(6.251953125, 11.625, 4.875, 0.6875, 5.5625, -2.546875, 9.078125, 9.078125, true)),
    glyph("\\oint", true, "default", 12.0, "rm", Metrics::new(6.251953125, 11.625, 4.875, 0.6875, 5.5625, -2.546875, 9.078125, 9.078125, true)),
    glyph("\\iint", true, "default", 12.0, "rm", Metrics::new(9.46875, 11.625, 8.09375, 0.6875, 8.78125, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\iiint", true, "default", 12.0, "rm", Metrics::new(12.685546875, 11.625, 11.3125, 0.6875, 12.0, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\bigcap", true, "default", 12.0, "rm", Metrics::new(9.84375, 10.921875, 8.203125, 0.828125, 9.03125, -2.296875, 8.625, 8.625, false)),
    glyph("\\bigcup", true, "default", 12.0, "rm", Metrics::new(9.84375, 10.921875, 8.203125, 0.828125, 9.03125, -2.296875, 8.625, 8.625, false)),
    glyph("\\bigvee", true, "default", 12.0, "rm", Metrics::new(9.84375, 10.921875, 9.90625, -0.03125, 9.875, -2.296875, 8.625, 8.625, false)),
    glyph("\\bigwedge", true, "default", 12.0, "rm", Metrics::new(9.84375, 10.921875, 9.90625, -0.03125, 9.875, -2.296875, 8.625, 8.625, false)),
    glyph("\\bigoplus", true, "default", 12.0, "rm", Metrics::new(12.0, 11.34375, 11.3125, 0.34375, 11.65625, -2.375, 8.96875, 8.96875, false)),
    glyph("\\bigotimes", true, "default", 12.0, "rm", Metrics::new(12.0, 11.34375, 11.3125, 0.34375, 11.65625, -2.375, 8.96875, 8.96875, false)),
    glyph("\\pm", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.53125, 7.515625, 1.265625, 8.78125, 0.0, 7.53125, 7.53125, false)),
    glyph("\\mp", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.53125, 7.515625, 1.265625, 8.78125, 0.0, 7.53125, 7.53125, false)),
    glyph("\\times", true, "default", 12.0, "rm", Metrics::new(10.0546875, 6.78125, 6.78125, 1.640625, 8.421875, 0.375, 7.15625, 7.15625, false)),
    glyph("\\div", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.78125, 7.515625, 1.265625, 8.78125, 0.875, 6.65625, 6.65625, false)),
    glyph("\\cdot", true, "default", 12.0, "rm", Metrics::new(3.814453125, 1.484375, 1.234375, 1.28125, 2.515625, 3.421875, 4.90625, 4.90625, false)),
    glyph("\\ast", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.53125, 7.0, 1.53125, 8.53125, 0.0, 7.53125, 7.53125, false)),
    glyph("\\star", true, "default", 12.0, "rm", Metrics::new(7.51171875, 4.359375, 4.59375, 1.453125, 6.046875, 1.78125, 6.140625, 6.140625, false)),
    glyph("\\circ", true, "default", 12.0, "rm", Metrics::new(7.51171875, 3.71875, 3.703125, 1.90625, 5.609375, 1.921875, 5.640625, 5.640625, false)),
    glyph("\\bullet", true, "default", 12.0, "rm", Metrics::new(7.51171875, 3.46875, 3.484375, 2.015625, 5.5, 2.015625, 5.484375, 5.484375, false)),
    glyph("\\cap", true, "default", 12.0, "rm", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\cup", true, "default", 12.0, "rm", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\uplus", true, "default", 12.0, "rm", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.03125, 6.984375, 6.984375, false)),
    glyph("\\sqcap", true, "default", 12.0, "rm", Metrics::new(9.36328125, 7.515625, 6.828125, 1.265625, 8.09375, 0.0, 7.515625, 7.515625, false)),
    glyph("\\sqcup", true, "default", 12.0, "rm", Metrics::new(9.36328125, 7.515625, 6.828125, 1.265625, 8.09375, 0.0, 7.515625, 7.515625, false)),
    glyph("\\vee", true, "default", 12.0, "rm", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\wedge", true, "default", 12.0, "rm", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\setminus", true, "default", 12.0, "rm", Metrics::new(7.640625, 9.859375, 4.046875, 2.3125, 6.359375, -0.640625, 9.21875, 9.21875, false)),
    glyph("\\wr", true, "default", 12.0, "rm", Metrics::new(4.5, 7.515625, 2.0625, 1.21875, 3.28125, 0.0, 7.515625, 7.515625, false)),
    glyph("\\diamond", true, "default", 12.0, "rm", Metrics::new(7.51171875, 5.984375, 5.984375, 0.765625, 6.75, 0.765625, 6.75, 6.75, false)),
    glyph("\\oplus", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\ominus", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\otimes", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\oslash", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\odot", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\bigcirc", true, "default", 12.0, "rm", Metrics::new(10.470703125, 9.234375, 9.15625, 0.65625, 9.8125, -1.5, 7.734375, 7.734375, false)),
    glyph("\\dagger", true, "default", 12.0, "rm", Metrics::new(6.0, 9.90625, 5.34375, 0.328125, 5.671875, -1.15625, 8.75, 8.75, false)),
    glyph("\\ddagger", true, "default", 12.0, "rm", Metrics::new(6.0, 9.90625, 5.34375, 0.328125, 5.671875, -1.15625, 8.75, 8.75, false)),
    glyph("\\leq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 6.984375, 7.515625, 1.265625, 8.78125, 0.0, 6.984375, 6.984375, false)),
    glyph("\\geq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 6.984375, 7.515625, 1.265625, 8.78125, 0.0, 6.984375, 6.984375, false)),
    glyph("\\neq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.0625, 7.515625, 1.265625, 8.78125, 0.234375, 7.296875, 7.296875, false)),
    glyph("\\equiv", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.375, 7.515625, 1.265625, 8.78125, 1.078125, 6.453125, 6.453125, false)),
    glyph("\\sim", true, "default", 12.0, "rm", Metrics::new(10.0546875, 2.0625, 7.515625, 1.265625, 8.78125, 2.734375, 4.796875, 4.796875, false)),
    glyph("\\simeq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 3.875, 7.515625, 1.265625, 8.78125, 2.0625, 5.9375, 5.9375, false)),
    glyph("\\approx", true, "default", 12.0, "rm", Metrics::new(10.0546875, 4.34375, 7.515625, 1.265625, 8.78125, 1.59375, 5.9375, 5.9375, false)),
    glyph("\\cong", true, "default", 12.0, "rm", Metrics::new(10.0546875, 6.046875, 7.515625, 1.265625, 8.78125, 1.078125, 7.125, 7.125, false)),
    glyph("\\propto", true, "default", 12.0, "rm", Metrics::new(8.572265625, 4.5, 5.984375, 1.296875, 7.28125, 1.34375, 5.84375, 5.84375, false)),
    glyph("\\subset", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.609375, 7.65625, 1.203125, 8.859375, 0.953125, 6.5625, 6.5625, false)),
    glyph("\\supset", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.609375, 7.65625, 1.203125, 8.859375, 0.953125, 6.5625, 6.5625, false)),
    glyph("\\subseteq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.359375, 7.671875, 1.109375, 8.78125, 0.0, 7.359375, 7.359375, false)),
    glyph("\\supseteq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.359375, 7.671875, 1.265625, 8.9375, 0.0, 7.359375, 7.359375, false)),
    glyph("\\in", true, "default", 12.0, "rm", Metrics::new(10.453125, 8.625, 8.390625, 1.03125, 9.421875, -0.109375, 8.515625, 8.515625, false)),
    glyph("\\ni", true, "default", 12.0, "rm", Metrics::new(10.453125, 8.625, 8.390625, 1.03125, 9.421875, -0.109375, 8.515625, 8.515625, false)),
    glyph("\\notin", true, "default", 12.0, "rm", Metrics::new(10.453125, 11.6875, 8.390625, 1.03125, 9.421875, -1.65625, 10.03125, 10.03125, false)),
    glyph("\\ll", true, "default", 12.0, "rm", Metrics::new(12.5625, 7.046875, 10.828125, 0.875, 11.703125, 0.265625, 7.3125, 7.3125, false)),
    glyph("\\gg", true, "default", 12.0, "rm", Metrics::new(12.5625, 7.046875, 10.828125, 0.875, 11.703125, 0.265625, 7.3125, 7.3125, false)),
    glyph("\\prec", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.421875, 7.515625, 1.265625, 8.78125, -0.453125, 7.96875, 7.96875, false)),
    glyph("\\succ", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.421875, 7.515625, 1.265625, 8.78125, -0.453125, 7.96875, 7.96875, false)),
    glyph("\\mid", true, "default", 12.0, "rm", Metrics::new(6.0, 11.8125, 0.9375, 2.53125, 3.46875, -2.5625, 9.25, 9.25, false)),
    glyph("\\parallel", true, "default", 12.0, "rm", Metrics::new(6.0, 11.8125, 2.8125, 1.59375, 4.40625, -2.5625, 9.25, 9.25, false)),
    glyph("\\vdash", true, "default", 12.0, "rm", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\dashv", true, "default", 12.0, "rm", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\models", true, "default", 12.0, "rm", Metrics::new(6.24609375, 8.40625, 4.203125, 1.03125, 5.234375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\asymp", true, "default", 12.0, "rm", Metrics::new(10.0546875, 4.984375, 7.515625, 1.265625, 8.78125, 1.265625, 6.25, 6.25, false)),
    glyph("\\doteq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.4375, 7.515625, 1.265625, 8.78125, 2.0625, 7.5, 7.5, false)),
    glyph("\\bowtie", true, "default", 12.0, "rm", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\leftarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\rightarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\uparrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.796875, 5.140625, 2.453125, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\downarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.796875, 5.140625, 2.453125, 7.59375, -0.046875, 8.75, 8.75, false)),
    glyph("\\leftrightarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.875, 0.59375, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\updownarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.890625, 5.140625, 2.453125, 7.59375, -0.09375, 8.796875, 8.796875, false)),
    glyph("\\Leftarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Rightarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Uparrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.796875, 5.125, 2.46875, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\Downarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.796875, 5.125, 2.46875, 7.59375, -0.046875, 8.75, 8.75, false)),
    glyph("\\Leftrightarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.875, 0.59375, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Updownarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.890625, 5.125, 2.46875, 7.59375, -0.09375, 8.796875, 8.796875, false)),
    glyph("\\mapsto", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\longleftarrow", true, "default", 12.0, "rm", Metrics::new(17.203125, 5.125, 15.921875, 0.59375, 16.515625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\longrightarrow", true, "default", 12.0, "rm", Metrics::new(17.203125, 5.125, 15.9375, 0.6875, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\hookleftarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.578125, 8.765625, 0.59375, 9.359375, 1.203125, 6.78125, 6.78125, false)),
    glyph("\\hookrightarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.578125, 8.78125, 0.6875, 9.46875, 1.203125, 6.78125, 6.78125, false)),
    glyph("\\nearrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 6.734375, 6.75, 1.6875, 8.4375, 0.3125, 7.046875, 7.046875, false)),
    glyph("\\searrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 6.734375, 6.75, 1.6875, 8.4375, 0.3125, 7.046875, 7.046875, false)),
    glyph("\\swarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 6.734375, 6.75, 1.6875, 8.4375, 0.3125, 7.046875, 7.046875, false)),
    glyph("\\nwarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 6.734375, 6.75, 1.6875, 8.4375, 0.3125, 7.046875, 7.046875, false)),
    glyph("\\leftharpoonup", true, "default", 12.0, "rm", Metrics::new(10.0546875, 3.0625, 8.78125, 0.59375, 9.375, 3.265625, 6.328125, 6.328125, false)),
    glyph("\\rightharpoonup", true, "default", 12.0, "rm", Metrics::new(10.0546875, 3.0625, 8.78125, 0.6875, 9.46875, 3.265625, 6.328125, 6.328125, false)),
    glyph("\\rightleftharpoons", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.359375, 8.875, 0.59375, 9.46875, 0.078125, 7.4375, 7.4375, false)),
    glyph("\\infty", true, "default", 12.0, "rm", Metrics::new(9.99609375, 4.5, 7.40625, 1.296875, 8.703125, 1.34375, 5.84375, 5.84375, false)),
    glyph("\\partial", true, "default", 12.0, "rm", Metrics::new(6.205078125, 8.125, 5.09375, 0.5625, 5.65625, -0.171875, 7.953125, 7.953125, false)),
    glyph("\\nabla", true, "default", 12.0, "rm", Metrics::new(8.02734375, 8.625, 8.09375, -0.03125, 8.0625, 0.0, 8.625, 8.625, false)),
    glyph("\\forall", true, "default", 12.0, "rm", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("\\exists", true, "default", 12.0, "rm", Metrics::new(7.58203125, 8.75, 5.640625, 1.171875, 6.8125, 0.0, 8.75, 8.75, false)),
    glyph("\\neg", true, "default", 12.0, "rm", Metrics::new(10.0546875, 3.359375, 7.515625, 1.265625, 8.78125, 1.6875, 5.046875, 5.046875, false)),
    glyph("\\emptyset", true, "default", 12.0, "rm", Metrics::new(10.453125, 8.625, 8.640625, 0.90625, 9.546875, -0.109375, 8.515625, 8.515625, false)),
    glyph("\\aleph", true, "default", 12.0, "rm", Metrics::new(8.94140625, 9.078125, 7.9375, 0.609375, 8.546875, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\hbar", true, "default", 12.0, "rm", Metrics::new(8.337890625, 9.125, 6.234375, 0.703125, 6.9375, 0.0, 9.125, 9.125, false)),
    glyph("\\ell", true, "default", 12.0, "rm", Metrics::new(4.95703125, 9.078125, 4.390625, -0.15625, 4.234375, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\wp", true, "default", 12.0, "rm", Metrics::new(8.3671875, 8.59375, 7.25, 0.640625, 7.890625, -2.65625, 5.9375, 5.9375, false)),
    glyph("\\Re", true, "default", 12.0, "rm", Metrics::new(9.767578125, 9.078125, 9.15625, 0.484375, 9.640625, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\Im", true, "default", 12.0, "rm", Metrics::new(8.3671875, 9.078125, 7.28125, 0.625, 7.90625, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\prime", true, "default", 12.0, "rm", Metrics::new(2.724609375, 2.1875, 2.203125, 0.234375, 2.4375, 6.5625, 8.75, 8.75, false)),
    glyph("\\angle", true, "default", 12.0, "rm", Metrics::new(10.7578125, 8.75, 8.390625, 1.03125, 9.421875, 0.0, 8.75, 8.75, false)),
    glyph("\\triangle", true, "default", 12.0, "rm", Metrics::new(9.228515625, 9.1875, 9.15625, 0.03125, 9.1875, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\surd", true, "default", 12.0, "rm", Metrics::new(7.646484375, 9.96875, 7.28125, 0.359375, 7.640625, -0.234375, 9.734375, 9.734375, false)),
    glyph("\\top", true, "default", 12.0, "rm", Metrics::new(10.453125, 8.40625, 8.390625, 1.03125, 9.421875, 0.0, 8.40625, 8.40625, false)),
    glyph("\\bot", true, "default", 12.0, "rm", Metrics::new(10.453125, 8.40625, 8.390625, 1.03125, 9.421875, 0.0, 8.40625, 8.40625, false)),
    glyph("\\flat", true, "default", 12.0, "rm", Metrics::new(5.66015625, 8.796875, 3.640625, 1.0625, 4.703125, -0.03125, 8.765625, 8.765625, false)),
    glyph("\\natural", true, "default", 12.0, "rm", Metrics::new(4.2890625, 8.765625, 2.265625, 1.015625, 3.28125, 0.0, 8.765625, 8.765625, false)),
    glyph("\\sharp", true, "default", 12.0, "rm", Metrics::new(5.806640625, 8.765625, 3.796875, 1.015625, 4.8125, 0.0, 8.765625, 8.765625, false)),
    glyph("\\clubsuit", true, "default", 12.0, "rm", Metrics::new(10.7578125, 8.75, 8.078125, 1.34375, 9.421875, 0.0, 8.75, 8.75, false)),
    glyph("\\diamondsuit", true, "default", 12.0, "rm", Metrics::new(10.7578125, 8.75, 6.71875, 2.015625, 8.734375, 0.0, 8.75, 8.75, false)),
    glyph("\\heartsuit", true, "default", 12.0, "rm", Metrics::new(10.7578125, 8.71875, 8.59375, 1.078125, 9.671875, 0.0, 8.71875, 8.71875, false)),
    glyph("\\spadesuit", true, "default", 12.0, "rm", Metrics::new(10.7578125, 8.75, 6.96875, 1.890625, 8.859375, 0.0, 8.75, 8.75, false)),
    glyph("\\ldots", true, "default", 12.0, "rm", Metrics::new(12.0, 1.484375, 9.234375, 1.390625, 10.625, 0.0, 1.484375, 1.484375, false)),
    glyph("\\cdots", true, "default", 12.0, "rm", Metrics::new(12.0, 1.5, 9.21875, 1.390625, 10.609375, 2.984375, 4.484375, 4.484375, false)),
    glyph("\\vdots", true, "default", 12.0, "rm", Metrics::new(12.0, 9.6875, 1.234375, 5.375, 6.609375, -1.109375, 8.578125, 8.578125, false)),
    glyph("\\ddots", true, "default", 12.0, "rm", Metrics::new(12.0, 9.6875, 9.21875, 1.390625, 10.609375, -1.109375, 8.578125, 8.578125, false)),
    glyph("\\langle", true, "default", 12.0, "rm", Metrics::new(4.681640625, 10.6875, 2.640625, 1.078125, 3.71875, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\rangle", true, "default", 12.0, "rm", Metrics::new(4.681640625, 10.6875, 2.640625, 0.96875, 3.609375, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\lfloor", true, "default", 12.0, "rm", Metrics::new(4.681640625, 10.703125, 2.484375, 1.03125, 3.515625, -1.578125, 9.125, 9.125, false)),
    glyph("\\rfloor", true, "default", 12.0, "rm", Metrics::new(4.681640625, 10.703125, 2.484375, 1.171875, 3.65625, -1.578125, 9.125, 9.125, false)),
    glyph("\\lceil", true, "default", 12.0, "rm", Metrics::new(4.681640625, 10.703125, 2.484375, 1.03125, 3.515625, -1.578125, 9.125, 9.125, false)),
    glyph("\\rceil", true, "default", 12.0, "rm", Metrics::new(4.681640625, 10.703125, 2.484375, 1.171875, 3.65625, -1.578125, 9.125, 9.125, false)),
    glyph("\\lbrace", true, "default", 12.0, "rm", Metrics::new(7.634765625, 11.078125, 4.640625, 1.5, 6.140625, -1.953125, 9.125, 9.125, false)),
    glyph("\\rbrace", true, "default", 12.0, "rm", Metrics::new(7.634765625, 11.078125, 4.640625, 1.5, 6.140625, -1.953125, 9.125, 9.125, false)),
    glyph("\\vert", true, "default", 12.0, "rm", Metrics::new(4.04296875, 12.0, 0.984375, 1.53125, 2.515625, -2.828125, 9.171875, 9.171875, false)),
    glyph("\\Vert", true, "default", 12.0, "rm", Metrics::new(6.0, 12.0, 2.921875, 1.53125, 4.453125, -2.828125, 9.171875, 9.171875, false)),
    glyph("\\backslash", true, "default", 12.0, "rm", Metrics::new(4.04296875, 9.859375, 4.046875, 0.0, 4.046875, -1.109375, 8.75, 8.75, false)),
    glyph("\\S", true, "default", 12.0, "rm", Metrics::new(6.0, 10.046875, 4.90625, 0.546875, 5.453125, -1.140625, 8.90625, 8.90625, false)),
    glyph("\\P", true, "default", 12.0, "rm", Metrics::new(7.634765625, 9.90625, 5.40625, 0.921875, 6.328125, -1.15625, 8.75, 8.75, false)),
    glyph("\\copyright", true, "default", 12.0, "rm", Metrics::new(12.0, 8.703125, 8.6875, 1.65625, 10.34375, 0.0, 8.703125, 8.703125, false)),
    glyph("\\degree", true, "default", 12.0, "rm", Metrics::new(6.0, 3.71875, 3.71875, 1.140625, 4.859375, 5.1875, 8.90625, 8.90625, false)),
    glyph("\\imath", true, "default", 12.0, "rm", Metrics::new(3.333984375, 6.71875, 1.078125, 1.125, 2.203125, 0.0, 6.71875, 6.71875, false)),
    glyph("\\jmath", true, "default", 12.0, "rm", Metrics::new(3.333984375, 9.0625, 2.421875, -0.21875, 2.203125, -2.5, 6.5625, 6.5625, false)),
    glyph("\\nleftarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\nrightarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\twoheadleftarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\twoheadrightarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\leftarrowtail", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\rightarrowtail", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\mapsfrom", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\mapsup", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.796875, 5.125, 2.46875, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\mapsdown", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.796875, 5.125, 2.46875, 7.59375, -0.046875, 8.75, 8.75, false)),
    glyph("\\looparrowleft", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.578125, 8.765625, 0.59375, 9.359375, 1.203125, 6.78125, 6.78125, false)),
    glyph("\\looparrowright", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.578125, 8.78125, 0.6875, 9.46875, 1.203125, 6.78125, 6.78125, false)),
    glyph("\\leftrightsquigarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.875, 0.59375, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\nleftrightarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.296875, 8.875, 0.59375, 9.46875, 1.109375, 6.40625, 6.40625, false)),
    glyph("\\Lsh", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.921875, 5.515625, 2.03125, 7.546875, 0.0, 8.921875, 8.921875, false)),
    glyph("\\Rsh", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.921875, 5.515625, 2.515625, 8.03125, 0.0, 8.921875, 8.921875, false)),
    glyph("\\curvearrowleft", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.578125, 9.328125, 0.265625, 9.59375, 2.4375, 8.015625, 8.015625, false)),
    glyph("\\curvearrowright", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.578125, 9.328125, 0.46875, 9.796875, 2.4375, 8.015625, 8.015625, false)),
    glyph("\\circlearrowleft", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.40625, 7.90625, 1.234375, 9.140625, 0.75, 8.15625, 8.15625, false)),
    glyph("\\circlearrowright", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.40625, 7.90625, 0.921875, 8.828125, 0.75, 8.15625, 8.15625, false)),
    glyph("\\leftharpoondown", true, "default", 12.0, "rm", Metrics::new(10.0546875, 3.0625, 8.78125, 0.59375, 9.375, 1.203125, 4.265625, 4.265625, false)),
    glyph("\\upharpoonright", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.796875, 3.0625, 4.53125, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\upharpoonleft", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.796875, 3.078125, 2.453125, 5.53125, 0.0, 8.796875, 8.796875, false)),
    glyph("\\rightharpoondown", true, "default", 12.0, "rm", Metrics::new(10.0546875, 3.0625, 8.78125, 0.6875, 9.46875, 1.203125, 4.265625, 4.265625, false)),
    glyph("\\downharpoonright", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.796875, 3.0625, 4.53125, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\downharpoonleft", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.796875, 3.078125, 2.453125, 5.53125, 0.0, 8.796875, 8.796875, false)),
    glyph("\\rightleftarrows", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.65625, 8.875, 0.59375, 9.46875, -0.5625, 8.09375, 8.09375, false)),
    glyph("\\leftrightarrows", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.65625, 8.875, 0.59375, 9.46875, -0.5625, 8.09375, 8.09375, false)),
    glyph("\\leftleftarrows", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.65625, 8.78125, 0.59375, 9.375, -0.5625, 8.09375, 8.09375, false)),
    glyph("\\upuparrows", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.796875, 8.65625, 0.703125, 9.359375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\rightrightarrows", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.65625, 8.78125, 0.6875, 9.46875, -0.5625, 8.09375, 8.09375, false)),
    glyph("\\downdownarrows", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.796875, 8.65625, 0.703125, 9.359375, -0.046875, 8.75, 8.75, false)),
    glyph("\\leftrightharpoons", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.359375, 8.875, 0.59375, 9.46875, 0.078125, 7.4375, 7.4375, false)),
    glyph("\\nLeftarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\nLeftrightarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.265625, 8.875, 0.59375, 9.46875, 1.125, 6.390625, 6.390625, false)),
    glyph("\\nRightarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Lleftarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Rrightarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\leftsquigarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\rightsquigarrow", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\longleftrightarrow", true, "default", 12.0, "rm", Metrics::new(17.203125, 5.125, 16.03125, 0.59375, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Longleftarrow", true, "default", 12.0, "rm", Metrics::new(17.203125, 5.125, 15.921875, 0.59375, 16.515625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Longrightarrow", true, "default", 12.0, "rm", Metrics::new(17.203125, 5.125, 15.9375, 0.6875, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Longleftrightarrow", true, "default", 12.0, "rm", Metrics::new(17.203125, 5.125, 16.03125, 0.59375, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\longmapsto", true, "default", 12.0, "rm", Metrics::new(17.203125, 5.125, 15.9375, 0.6875, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\nmid", true, "default", 12.0, "rm", Metrics::new(6.0, 11.8125, 4.8125, 0.59375, 5.40625, -2.5625, 9.25, 9.25, false)),
    glyph("\\nparallel", true, "default", 12.0, "rm", Metrics::new(6.0, 11.8125, 4.8125, 0.59375, 5.40625, -2.5625, 9.25, 9.25, false)),
    glyph("\\backsim", true, "default", 12.0, "rm", Metrics::new(10.0546875, 2.0625, 7.515625, 1.265625, 8.78125, 2.734375, 4.796875, 4.796875, false)),
    glyph("\\nsim", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.71875, 7.515625, 1.265625, 8.78125, 0.921875, 6.640625, 6.640625, false)),
    glyph("\\eqsim", true, "default", 12.0, "rm", Metrics::new(10.0546875, 3.859375, 7.515625, 1.265625, 8.78125, 1.59375, 5.453125, 5.453125, false)),
    glyph("\\ncong", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.953125, 7.515625, 1.265625, 8.78125, -0.0625, 7.890625, 7.890625, false)),
    glyph("\\napprox", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.46875, 7.515625, 1.265625, 8.78125, 0.03125, 7.5, 7.5, false)),
    glyph("\\approxeq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 6.09375, 7.515625, 1.265625, 8.78125, 1.078125, 7.171875, 7.171875, false)),
    glyph("\\allequal", true, "default", 12.0, "rm", Metrics::new(10.0546875, 6.046875, 7.515625, 1.265625, 8.78125, 1.078125, 7.125, 7.125, false)),
    glyph("\\Bumpeq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 6.890625, 7.515625, 1.265625, 8.78125, 0.3125, 7.203125, 7.203125, false)),
    glyph("\\bumpeq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 5.140625, 7.515625, 1.265625, 8.78125, 2.0625, 7.203125, 7.203125, false)),
    glyph("\\Doteq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.484375, 7.515625, 1.265625, 8.78125, 0.015625, 7.5, 7.5, false)),
    glyph("\\fallingdotseq", true, "default", 12.0, "rm", Metrics::new(10.06640625, 7.46875, 7.53125, 1.265625, 8.796875, 0.03125, 7.5, 7.5, false)),
    glyph("\\risingdotseq", true, "default", 12.0, "rm", Metrics::new(10.06640625, 7.46875, 7.53125, 1.265625, 8.796875, 0.03125, 7.5, 7.5, false)),
    glyph("\\coloneq", true, "default", 12.0, "rm", Metrics::new(12.0, 3.90625, 9.578125, 1.21875, 10.796875, 1.8125, 5.71875, 5.71875, false)),
    glyph("\\eqcolon", true, "default", 12.0, "rm", Metrics::new(12.0, 3.890625, 9.59375, 1.203125, 10.796875, 1.8125, 5.703125, 5.703125, false)),
    glyph("\\eqcirc", true, "default", 12.0, "rm", Metrics::new(10.0546875, 3.390625, 7.515625, 1.265625, 8.78125, 2.0625, 5.453125, 5.453125, false)),
    glyph("\\circeq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.0625, 7.515625, 1.265625, 8.78125, 2.0625, 9.125, 9.125, false)),
    glyph("\\wedgeq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.6875, 7.515625, 1.265625, 8.78125, 2.0625, 9.75, 9.75, false)),
    glyph("\\veeeq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.6875, 7.515625, 1.265625, 8.78125, 2.0625, 9.75, 9.75, false)),
    glyph("\\stareq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.125, 7.515625, 1.265625, 8.78125, 2.0625, 10.1875, 10.1875, false)),
    glyph("\\triangleq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.1875, 7.515625, 1.265625, 8.78125, 2.0625, 10.25, 10.25, false)),
    glyph("\\nequiv", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.109375, 7.515625, 1.265625, 8.78125, -0.296875, 7.8125, 7.8125, false)),
    glyph("\\leqq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.65625, 7.515625, 1.28125, 8.796875, -1.0, 7.65625, 7.65625, false)),
    glyph("\\geqq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.65625, 7.515625, 1.28125, 8.796875, -1.0, 7.65625, 7.65625, false)),
    glyph("\\lneqq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 9.625, 7.515625, 1.28125, 8.796875, -1.96875, 7.65625, 7.65625, false)),
    glyph("\\gneqq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 9.625, 7.515625, 1.28125, 8.796875, -1.96875, 7.65625, 7.65625, false)),
    glyph("\\between", true, "default", 12.0, "rm", Metrics::new(5.56640625, 10.6875, 3.5, 1.03125, 4.53125, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\nless", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.0625, 7.515625, 1.265625, 8.78125, 0.03125, 8.09375, 8.09375, false)),
    glyph("\\ngtr", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.0625, 7.515625, 1.265625, 8.78125, -0.5625, 7.5, 7.5, false)),
    glyph("\\nleq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 9.21875, 7.515625, 1.265625, 8.78125, -1.21875, 8.0, 8.0, false)),
    glyph("\\ngeq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 9.21875, 7.515625, 1.265625, 8.78125, -1.21875, 8.0, 8.0, false)),
    glyph("\\lesssim", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.640625, 7.53125, 1.265625, 8.796875, -0.65625, 6.984375, 6.984375, false)),
    glyph("\\gtrsim", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.453125, 7.515625, 1.28125, 8.796875, -0.46875, 6.984375, 6.984375, false)),
    glyph("\\lessgtr", true, "default", 12.0, "rm", Metrics::new(10.0546875, 9.28125, 7.578125, 1.21875, 8.796875, -1.046875, 8.234375, 8.234375, false)),
    glyph("\\gtrless", true, "default", 12.0, "rm", Metrics::new(10.0546875, 9.28125, 7.578125, 1.21875, 8.796875, -1.046875, 8.234375, 8.234375, false)),
    glyph("\\preccurlyeq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 9.28125, 7.515625, 1.265625, 8.78125, -1.265625, 8.015625, 8.015625, false)),
    glyph("\\succcurlyeq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 9.28125, 7.515625, 1.265625, 8.78125, -1.265625, 8.015625, 8.015625, false)),
    glyph("\\precsim", true, "default", 12.0, "rm", Metrics::new(10.0546875, 9.03125, 7.515625, 1.265625, 8.78125, -1.015625, 8.015625, 8.015625, false)),
    glyph("\\succsim", true, "default", 12.0, "rm", Metrics::new(10.0546875, 9.03125, 7.515625, 1.265625, 8.78125, -1.015625, 8.015625, 8.015625, false)),
    glyph("\\nprec", true, "default", 12.0, "rm", Metrics::new(10.0546875, 9.90625, 7.515625, 1.265625, 8.78125, -0.734375, 9.171875, 9.171875, false)),
    glyph("\\nsucc", true, "default", 12.0, "rm", Metrics::new(10.0546875, 9.90625, 7.515625, 1.265625, 8.78125, -1.65625, 8.25, 8.25, false)),
    glyph("\\nsubset", true, "default", 12.0, "rm", Metrics::new(10.0546875, 9.875, 7.65625, 1.203125, 8.859375, -1.15625, 8.71875, 8.71875, false)),
    glyph("\\nsupset", true, "default", 12.0, "rm", Metrics::new(10.0546875, 9.875, 7.65625, 1.203125, 8.859375, -1.203125, 8.671875, 8.671875, false)),
    glyph("\\nsubseteq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 10.15625, 7.671875, 1.109375, 8.78125, -1.390625, 8.765625, 8.765625, false)),
    glyph("\\nsupseteq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 10.15625, 7.671875, 1.265625, 8.9375, -1.390625, 8.765625, 8.765625, false)),
    glyph("\\subsetneq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.234375, 7.671875, 1.109375, 8.78125, -0.875, 7.359375, 7.359375, false)),
    glyph("\\supsetneq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.234375, 7.671875, 1.109375, 8.78125, -0.875, 7.359375, 7.359375, false)),
    glyph("\\sqsubset", true, "default", 12.0, "rm", Metrics::new(10.0546875, 6.8125, 7.515625, 1.265625, 8.78125, 0.0, 6.8125, 6.8125, false)),
    glyph("\\sqsupset", true, "default", 12.0, "rm", Metrics::new(10.0546875, 6.8125, 7.515625, 1.265625, 8.78125, 0.0, 6.8125, 6.8125, false)),
    glyph("\\sqsubseteq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.5625, 7.515625, 1.265625, 8.78125, -1.0, 7.5625, 7.5625, false)),
    glyph("\\sqsupseteq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.5625, 7.515625, 1.265625, 8.78125, -1.0, 7.5625, 7.5625, false)),
    glyph("\\vDash", true, "default", 12.0, "rm", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\Vdash", true, "default", 12.0, "rm", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\Vvdash", true, "default", 12.0, "rm", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\VDash", true, "default", 12.0, "rm", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\nvdash", true, "default", 12.0, "rm", Metrics::new(10.453125, 9.34375, 8.40625, 1.03125, 9.4375, -0.46875, 8.875, 8.875, false)),
    glyph("\\nvDash", true, "default", 12.0, "rm", Metrics::new(10.453125, 9.34375, 8.40625, 1.03125, 9.4375, -0.46875, 8.875, 8.875, false)),
    glyph("\\nVdash", true, "default", 12.0, "rm", Metrics::new(10.453125, 9.34375, 8.40625, 1.03125, 9.4375, -0.46875, 8.875, 8.875, false)),
    glyph("\\nVDash", true, "default", 12.0, "rm", Metrics::new(10.453125, 9.34375, 8.40625, 1.03125, 9.4375, -0.46875, 8.875, 8.875, false)),
    glyph("\\vartriangleleft", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.171875, 7.515625, 1.265625, 8.78125, 0.171875, 7.34375, 7.34375, false)),
    glyph("\\vartriangleright", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.171875, 7.515625, 1.265625, 8.78125, 0.171875, 7.34375, 7.34375, false)),
    glyph("\\trianglelefteq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.671875, 7.515625, 1.265625, 8.78125, -0.578125, 8.09375, 8.09375, false)),
    glyph("\\trianglerighteq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.671875, 7.515625, 1.265625, 8.78125, -0.578125, 8.09375, 8.09375, false)),
    glyph("\\multimap", true, "default", 12.0, "rm", Metrics::new(10.0546875, 3.34375, 8.90625, 0.578125, 9.484375, 2.109375, 5.453125, 5.453125, false)),
    glyph("\\backsimeq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 3.875, 7.515625, 1.265625, 8.78125, 2.0625, 5.9375, 5.9375, false)),
    glyph("\\Subset", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.59375, 7.671875, 1.109375, 8.78125, -0.03125, 7.5625, 7.5625, false)),
    glyph("\\Supset", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.59375, 7.671875, 1.265625, 8.9375, -0.03125, 7.5625, 7.5625, false)),
    glyph("\\pitchfork", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.75, 5.59375, 2.234375, 7.828125, 0.0, 8.75, 8.75, false)),
    glyph("\\lessdot", true, "default", 12.0, "rm", Metrics::new(10.0546875, 6.421875, 7.515625, 1.265625, 8.78125, 0.546875, 6.96875, 6.96875, false)),
    glyph("\\gtrdot", true, "default", 12.0, "rm", Metrics::new(10.0546875, 6.421875, 7.515625, 1.265625, 8.78125, 0.546875, 6.96875, 6.96875, false)),
    glyph("\\lll", true, "default", 12.0, "rm", Metrics::new(17.068359375, 7.046875, 15.328125, 0.875, 16.203125, 0.265625, 7.3125, 7.3125, false)),
    glyph("\\ggg", true, "default", 12.0, "rm", Metrics::new(17.068359375, 7.046875, 15.328125, 0.875, 16.203125, 0.265625, 7.3125, 7.3125, false)),
    glyph("\\lesseqgtr", true, "default", 12.0, "rm", Metrics::new(10.0546875, 12.984375, 7.515625, 1.265625, 8.78125, -2.734375, 10.25, 10.25, false)),
    glyph("\\gtreqless", true, "default", 12.0, "rm", Metrics::new(10.0546875, 12.984375, 7.515625, 1.265625, 8.78125, -2.734375, 10.25, 10.25, false)),
    glyph("\\curlyeqprec", true, "default", 12.0, "rm", Metrics::new(10.0546875, 9.28125, 7.515625, 1.265625, 8.78125, -1.265625, 8.015625, 8.015625, false)),
    glyph("\\curlyeqsucc", true, "default", 12.0, "rm", Metrics::new(10.0546875, 9.28125, 7.515625, 1.265625, 8.78125, -1.265625, 8.015625, 8.015625, false)),
    glyph("\\npreccurlyeq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 11.3125, 7.515625, 1.265625, 8.78125, -2.140625, 9.171875, 9.171875, false)),
    glyph("\\nsucccurlyeq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 11.3125, 7.515625, 1.265625, 8.78125, -2.140625, 9.171875, 9.171875, false)),
    glyph("\\nsqsubseteq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 10.890625, 7.515625, 1.265625, 8.78125, -1.6875, 9.203125, 9.203125, false)),
    glyph("\\nsqsupseteq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 10.890625, 7.515625, 1.265625, 8.78125, -1.6875, 9.203125, 9.203125, false)),
    glyph("\\lnsim", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.640625, 7.53125, 1.265625, 8.796875, -1.65625, 6.984375, 6.984375, false)),
    glyph("\\gnsim", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.640625, 7.53125, 1.265625, 8.796875, -1.65625, 6.984375, 6.984375, false)),
    glyph("\\precnsim", true, "default", 12.0, "rm", Metrics::new(10.0546875, 10.046875, 7.515625, 1.265625, 8.78125, -2.03125, 8.015625, 8.015625, false)),
    glyph("\\succnsim", true, "default", 12.0, "rm", Metrics::new(10.0546875, 10.0625, 7.515625, 1.3125, 8.828125, -2.046875, 8.015625, 8.015625, false)),
    glyph("\\ntriangleleft", true, "default", 12.0, "rm", Metrics::new(10.0546875, 10.640625, 7.515625, 1.265625, 8.78125, -1.5625, 9.078125, 9.078125, false)),
    glyph("\\ntriangleright", true, "default", 12.0, "rm", Metrics::new(10.0546875, 10.640625, 7.515625, 1.265625, 8.78125, -1.5625, 9.078125, 9.078125, false)),
    glyph("\\ntrianglelefteq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 12.046875, 7.515625, 1.265625, 8.78125, -2.265625, 9.78125, 9.78125, false)),
    glyph("\\ntrianglerighteq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 12.046875, 7.515625, 1.25, 8.765625, -2.265625, 9.78125, 9.78125, false)),
    glyph("\\leqslant", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -1.46875, 6.96875, 6.96875, false)),
    glyph("\\geqslant", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -1.46875, 6.96875, 6.96875, false)),
    glyph("\\lessapprox", true, "default", 12.0, "rm", Metrics::new(10.0546875, 9.546875, 7.53125, 1.265625, 8.796875, -1.59375, 7.953125, 7.953125, false)),
    glyph("\\gtrapprox", true, "default", 12.0, "rm", Metrics::new(10.0546875, 9.546875, 7.53125, 1.265625, 8.796875, -1.59375, 7.953125, 7.953125, false)),
    glyph("\\lneq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -1.453125, 6.984375, 6.984375, false)),
    glyph("\\gneq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -1.453125, 6.984375, 6.984375, false)),
    glyph("\\lnapprox", true, "default", 12.0, "rm", Metrics::new(10.0546875, 10.390625, 7.53125, 1.265625, 8.796875, -2.4375, 7.953125, 7.953125, false)),
    glyph("\\gnapprox", true, "default", 12.0, "rm", Metrics::new(10.0546875, 10.390625, 7.53125, 1.265625, 8.796875, -2.4375, 7.953125, 7.953125, false)),
    glyph("\\lesseqqgtr", true, "default", 12.0, "rm", Metrics::new(10.0546875, 13.21875, 7.515625, 1.265625, 8.78125, -3.71875, 9.5, 9.5, false)),
    glyph("\\gtreqqless", true, "default", 12.0, "rm", Metrics::new(10.0546875, 13.21875, 7.515625, 1.265625, 8.78125, -3.71875, 9.5, 9.5, false)),
    glyph("\\eqslantless", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -0.71875, 7.71875, 7.71875, false)),
    glyph("\\eqslantgtr", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -0.71875, 7.71875, 7.71875, false)),
    glyph("\\preceq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.296875, 7.515625, 1.265625, 8.78125, -0.28125, 8.015625, 8.015625, false)),
    glyph("\\succeq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.296875, 7.515625, 1.265625, 8.78125, -0.28125, 8.015625, 8.015625, false)),
    glyph("\\precneqq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 10.28125, 7.515625, 1.265625, 8.78125, -2.34375, 7.9375, 7.9375, false)),
    glyph("\\succneqq", true, "default", 12.0, "rm", Metrics::new(10.0546875, 10.28125, 7.515625, 1.265625, 8.78125, -2.34375, 7.9375, 7.9375, false)),
    glyph("\\precapprox", true, "default", 12.0, "rm", Metrics::new(10.0546875, 10.609375, 7.515625, 1.265625, 8.78125, -2.296875, 8.3125, 8.3125, false)),
    glyph("\\succapprox", true, "default", 12.0, "rm", Metrics::new(10.0546875, 10.609375, 7.515625, 1.265625, 8.78125, -2.296875, 8.3125, 8.3125, false)),
    glyph("\\precnapprox", true, "default", 12.0, "rm", Metrics::new(10.0546875, 11.421875, 7.53125, 1.265625, 8.796875, -3.109375, 8.3125, 8.3125, false)),
    glyph("\\succnapprox", true, "default", 12.0, "rm", Metrics::new(10.0546875, 11.421875, 7.53125, 1.265625, 8.796875, -3.109375, 8.3125, 8.3125, false)),
    glyph("\\dotplus", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.75, 7.515625, 1.265625, 8.78125, 0.0, 8.75, 8.75, false)),
    glyph("\\smallsetminus", true, "default", 12.0, "rm", Metrics::new(7.640625, 9.859375, 4.046875, 2.3125, 6.359375, -0.640625, 9.21875, 9.21875, false)),
    glyph("\\dotminus", true, "default", 12.0, "rm", Metrics::new(10.0546875, 3.359375, 7.515625, 1.265625, 8.78125, 3.265625, 6.625, 6.625, false)),
    glyph("\\cupdot", true, "default", 12.0, "rm", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\circledcirc", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\circledast", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\circleddash", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\boxplus", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\boxminus", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\boxtimes", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\boxdot", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\intercal", true, "default", 12.0, "rm", Metrics::new(6.24609375, 8.40625, 3.46875, 1.390625, 4.859375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\veebar", true, "default", 12.0, "rm", Metrics::new(8.783203125, 8.890625, 6.4375, 1.171875, 7.609375, 0.0, 8.890625, 8.890625, false)),
    glyph("\\barwedge", true, "default", 12.0, "rm", Metrics::new(8.783203125, 8.890625, 6.4375, 1.171875, 7.609375, 0.0, 8.890625, 8.890625, false)),
    glyph("\\barvee", true, "default", 12.0, "rm", Metrics::new(8.783203125, 8.890625, 6.4375, 1.171875, 7.609375, 0.0, 8.890625, 8.890625, false)),
    glyph("\\divideontimes", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.1875, 7.515625, 1.265625, 8.78125, 0.171875, 7.359375, 7.359375, false)),
    glyph("\\ltimes", true, "default", 12.0, "rm", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\rtimes", true, "default", 12.0, "rm", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\leftthreetimes", true, "default", 12.0, "rm", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\rightthreetimes", true, "default", 12.0, "rm", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\curlyvee", true, "default", 12.0, "rm", Metrics::new(8.7890625, 6.953125, 7.625, 0.578125, 8.203125, 0.0, 6.953125, 6.953125, false)),
    glyph("\\curlywedge", true, "default", 12.0, "rm", Metrics::new(8.7890625, 6.953125, 7.625, 0.578125, 8.203125, 0.0, 6.953125, 6.953125, false)),
    glyph("\\Cap", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.953125, 7.59375, 1.234375, 8.828125, 0.0, 7.953125, 7.953125, false)),
    glyph("\\Cup", true, "default", 12.0, "rm", Metrics::new(10.0546875, 7.953125, 7.59375, 1.234375, 8.828125, -0.171875, 7.78125, 7.78125, false)),
    glyph("\\doublebarwedge", true, "default", 12.0, "rm", Metrics::new(10.0546875, 6.15625, 5.140625, 2.453125, 7.59375, 0.0, 6.15625, 6.15625, false)),
    glyph("\\bigodot", true, "default", 12.0, "rm", Metrics::new(12.0, 11.34375, 11.3125, 0.34375, 11.65625, -2.375, 8.96875, 8.96875, false)),
    glyph("\\oiint", true, "default", 12.0, "rm", Metrics::new(9.46875, 11.625, 8.09375, 0.6875, 8.78125, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\oiiint", true, "default", 12.0, "rm", Metrics::new(12.685546875, 11.625, 11.3125, 0.6875, 12.0, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\iiiint", true, "default", 12.0, "rm", Metrics::new(15.90234375, 11.625, 14.53125, 0.6875, 15.21875, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\minus", true, "default", 12.0, "rm", Metrics::new(10.0546875, 1.0, 7.515625, 1.265625, 8.78125, 3.265625, 4.265625, 4.265625, false)),
    glyph("\\cdotp", true, "default", 12.0, "rm", Metrics::new(3.814453125, 1.484375, 1.234375, 1.28125, 2.515625, 3.421875, 4.90625, 4.90625, false)),
    glyph("\\hslash", true, "default", 12.0, "rm", Metrics::new(7.60546875, 9.125, 6.53125, 0.53125, 7.0625, 0.0, 9.125, 9.125, false)),
    glyph("\\beth", true, "default", 12.0, "rm", Metrics::new(8.0859375, 9.078125, 7.859375, -0.03125, 7.828125, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\gimel", true, "default", 12.0, "rm", Metrics::new(5.58984375, 9.328125, 4.71875, 0.15625, 4.875, -0.421875, 8.90625, 8.90625, false)),
    glyph("\\daleth", true, "default", 12.0, "rm", Metrics::new(7.734375, 9.328125, 6.59375, 0.5, 7.09375, -0.421875, 8.90625, 8.90625, false)),
    glyph("\\mho", true, "default", 12.0, "rm", Metrics::new(9.169921875, 8.859375, 8.265625, 0.453125, 8.71875, -0.171875, 8.6875, 8.6875, false)),
    glyph("\\eth", true, "default", 12.0, "rm", Metrics::new(7.341796875, 9.296875, 6.03125, 0.65625, 6.6875, -0.171875, 9.125, 9.125, false)),
    glyph("\\Finv", true, "default", 12.0, "rm", Metrics::new(6.90234375, 8.75, 5.03125, 1.171875, 6.203125, 0.0, 8.75, 8.75, false)),
    glyph("\\Game", true, "default", 12.0, "rm", Metrics::new(9.298828125, 9.078125, 7.640625, 0.953125, 8.59375, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\digamma", true, "default", 12.0, "rm", Metrics::new(5.501953125, 11.625, 6.03125, -1.125, 4.90625, -2.5, 9.125, 9.125, false)),
    glyph("\\varkappa", true, "default", 12.0, "rm", Metrics::new(7.962890625, 6.6875, 6.546875, 0.65625, 7.203125, -0.078125, 6.609375, 6.609375, false)),
    glyph("\\backepsilon", true, "default", 12.0, "rm", Metrics::new(7.3828125, 6.890625, 5.09375, 1.15625, 6.25, -0.171875, 6.71875, 6.71875, false)),
    glyph("\\AA", true, "default", 12.0, "rm", Metrics::new(8.208984375, 11.140625, 8.015625, 0.09375, 8.109375, 0.0, 11.140625, 11.140625, false)),
    glyph("\\ae", true, "default", 12.0, "rm", Metrics::new(11.783203125, 6.890625, 10.4375, 0.71875, 11.15625, -0.171875, 6.71875, 6.71875, false)),
    glyph("\\AE", true, "default", 12.0, "rm", Metrics::new(11.689453125, 8.75, 10.875, 0.046875, 10.921875, 0.0, 8.75, 8.75, false)),
    glyph("\\oe", true, "default", 12.0, "rm", Metrics::new(12.275390625, 6.890625, 10.984375, 0.65625, 11.640625, -0.171875, 6.71875, 6.71875, false)),
    glyph("\\OE", true, "default", 12.0, "rm", Metrics::new(12.837890625, 8.75, 11.40625, 0.671875, 12.078125, 0.0, 8.75, 8.75, false)),
    glyph("\\o", true, "default", 12.0, "rm", Metrics::new(7.341796875, 7.65625, 6.5, 0.421875, 6.921875, -0.546875, 7.109375, 7.109375, false)),
    glyph("\\O", true, "default", 12.0, "rm", Metrics::new(9.4453125, 9.546875, 8.25, 0.59375, 8.84375, -0.40625, 9.140625, 9.140625, false)),
    glyph("\\ss", true, "default", 12.0, "rm", Metrics::new(7.55859375, 9.296875, 5.921875, 1.09375, 7.015625, -0.171875, 9.125, 9.125, false)),
    glyph("\\l", true, "default", 12.0, "rm", Metrics::new(3.41015625, 9.125, 3.40625, 0.015625, 3.421875, 0.0, 9.125, 9.125, false)),
    glyph("\\L", true, "default", 12.0, "rm", Metrics::new(6.744140625, 8.75, 6.765625, -0.078125, 6.6875, 0.0, 8.75, 8.75, false)),
    glyph("\\complement", true, "default", 12.0, "rm", Metrics::new(7.634765625, 9.078125, 5.84375, 0.796875, 6.640625, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\nexists", true, "default", 12.0, "rm", Metrics::new(7.58203125, 9.859375, 5.640625, 1.171875, 6.8125, -0.546875, 9.3125, 9.3125, false)),
    glyph("\\varnothing", true, "default", 12.0, "rm", Metrics::new(10.453125, 8.625, 8.640625, 0.90625, 9.546875, -0.109375, 8.515625, 8.515625, false)),
    glyph("\\smallin", true, "default", 12.0, "rm", Metrics::new(8.61328125, 5.703125, 6.078125, 1.265625, 7.34375, 0.90625, 6.609375, 6.609375, false)),
    glyph("\\QED", true, "default", 12.0, "rm", Metrics::new(7.634765625, 5.828125, 4.109375, 1.765625, 5.875, 0.0, 5.828125, 5.828125, false)),
    glyph("\\measuredangle", true, "default", 12.0, "rm", Metrics::new(10.7578125, 9.375, 8.390625, 1.03125, 9.421875, -0.625, 8.75, 8.75, false)),
    glyph("\\sphericalangle", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.75, 7.40625, 1.390625, 8.796875, -0.03125, 8.71875, 8.71875, false)),
    glyph("\\rightangle", true, "default", 12.0, "rm", Metrics::new(10.0546875, 6.734375, 6.734375, 1.65625, 8.390625, 1.1875, 7.921875, 7.921875, false)),
    glyph("\\therefore", true, "default", 12.0, "rm", Metrics::new(7.634765625, 6.046875, 6.21875, 0.703125, 6.921875, 1.203125, 7.25, 7.25, false)),
    glyph("\\because", true, "default", 12.0, "rm", Metrics::new(7.634765625, 6.046875, 6.21875, 0.703125, 6.921875, 1.203125, 7.25, 7.25, false)),
    glyph("\\Colon", true, "default", 12.0, "rm", Metrics::new(7.634765625, 6.046875, 6.21875, 0.703125, 6.921875, 1.203125, 7.25, 7.25, false)),
    glyph("\\lnot", true, "default", 12.0, "rm", Metrics::new(10.0546875, 3.359375, 7.515625, 1.265625, 8.78125, 1.6875, 5.046875, 5.046875, false)),
    glyph("\\sqrt", true, "default", 12.0, "rm", Metrics::new(7.646484375, 9.96875, 7.28125, 0.359375, 7.640625, -0.234375, 9.734375, 9.734375, false)),
    glyph("\\dots", true, "default", 12.0, "rm", Metrics::new(12.0, 1.484375, 9.234375, 1.390625, 10.625, 0.0, 1.484375, 1.484375, false)),
    glyph("\\adots", true, "default", 12.0, "rm", Metrics::new(12.0, 9.6875, 9.21875, 1.390625, 10.609375, -1.109375, 8.578125, 8.578125, false)),
    glyph("\\ulcorner", true, "default", 12.0, "rm", Metrics::new(5.625, 4.015625, 3.8125, 1.03125, 4.84375, 5.109375, 9.125, 9.125, false)),
    glyph("\\urcorner", true, "default", 12.0, "rm", Metrics::new(5.625, 4.015625, 3.8125, 0.78125, 4.59375, 5.109375, 9.125, 9.125, false)),
    glyph("\\llcorner", true, "default", 12.0, "rm", Metrics::new(5.625, 4.015625, 3.8125, 1.03125, 4.84375, -0.84375, 3.171875, 3.171875, false)),
    glyph("\\lrcorner", true, "default", 12.0, "rm", Metrics::new(5.625, 4.015625, 3.8125, 0.78125, 4.59375, -0.84375, 3.171875, 3.171875, false)),
    glyph("\\lbrack", true, "default", 12.0, "rm", Metrics::new(4.681640625, 10.703125, 2.484375, 1.03125, 3.515625, -1.578125, 9.125, 9.125, false)),
    glyph("\\rbrack", true, "default", 12.0, "rm", Metrics::new(4.681640625, 10.703125, 2.484375, 1.171875, 3.65625, -1.578125, 9.125, 9.125, false)),
    glyph("\\leftparen", true, "default", 12.0, "rm", Metrics::new(4.681640625, 10.6875, 2.6875, 1.03125, 3.71875, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\rightparen", true, "default", 12.0, "rm", Metrics::new(4.681640625, 10.6875, 2.6875, 0.96875, 3.65625, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\bigtriangleup", true, "default", 12.0, "rm", Metrics::new(9.228515625, 9.1875, 9.15625, 0.03125, 9.1875, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\vartriangle", true, "default", 12.0, "rm", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\blacktriangle", true, "default", 12.0, "rm", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\triangleright", true, "default", 12.0, "rm", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\blacktriangleright", true, "default", 12.0, "rm", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\bigtriangledown", true, "default", 12.0, "rm", Metrics::new(9.228515625, 9.1875, 9.15625, 0.03125, 9.1875, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\triangledown", true, "default", 12.0, "rm", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\blacktriangledown", true, "default", 12.0, "rm", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\triangleleft", true, "default", 12.0, "rm", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\blacktriangleleft", true, "default", 12.0, "rm", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\lozenge", true, "default", 12.0, "rm", Metrics::new(5.9296875, 12.484375, 5.859375, 0.03125, 5.890625, -2.796875, 9.6875, 9.6875, false)),
    glyph("\\blacksquare", true, "default", 12.0, "rm", Metrics::new(11.337890625, 9.1875, 9.15625, 1.09375, 10.25, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\square", true, "default", 12.0, "rm", Metrics::new(11.337890625, 9.1875, 9.15625, 1.09375, 10.25, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\Box", true, "default", 12.0, "rm", Metrics::new(11.337890625, 9.1875, 9.15625, 1.09375, 10.25, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\bigstar", true, "default", 12.0, "rm", Metrics::new(10.7578125, 8.71875, 9.203125, 0.78125, 9.984375, -0.046875, 8.671875, 8.671875, false)),
    glyph("\\diagup", true, "default", 12.0, "rm", Metrics::new(7.224609375, 14.015625, 8.265625, -0.515625, 7.75, -2.875, 11.140625, 11.140625, false)),
    glyph("\\diagdown", true, "default", 12.0, "rm", Metrics::new(7.224609375, 14.015625, 8.265625, -0.515625, 7.75, -2.875, 11.140625, 11.140625, false)),
    glyph("\\varspadesuit", true, "default", 12.0, "rm", Metrics::new(10.7578125, 8.75, 6.984375, 1.890625, 8.875, 0.0, 8.75, 8.75, false)),
    glyph("\\varheartsuit", true, "default", 12.0, "rm", Metrics::new(10.7578125, 8.75, 8.640625, 1.0625, 9.703125, 0.0, 8.75, 8.75, false)),
    glyph("\\vardiamondsuit", true, "default", 12.0, "rm", Metrics::new(10.7578125, 8.75, 6.71875, 2.015625, 8.734375, 0.0, 8.75, 8.75, false)),
    glyph("\\varclubsuit", true, "default", 12.0, "rm", Metrics::new(10.7578125, 8.796875, 8.078125, 1.34375, 9.421875, 0.0, 8.796875, 8.796875, false)),
    glyph("\\checkmark", true, "default", 12.0, "rm", Metrics::new(10.0546875, 6.40625, 6.21875, 1.796875, 8.015625, 1.15625, 7.5625, 7.5625, false)),
    glyph("\\maltese", true, "default", 12.0, "rm", Metrics::new(10.0546875, 8.75, 8.75, 0.65625, 9.40625, 0.0, 8.75, 8.75, false)),
    glyph("\\sun", true, "default", 12.0, "rm", Metrics::new(10.7578125, 8.765625, 8.765625, 1.0, 9.765625, 0.0, 8.765625, 8.765625, false)),
    glyph("\\mercury", true, "default", 12.0, "rm", Metrics::new(7.365234375, 10.0, 5.3125, 1.03125, 6.34375, -1.21875, 8.78125, 8.78125, false)),
    glyph("\\venus", true, "default", 12.0, "rm", Metrics::new(8.7890625, 10.28125, 6.734375, 1.03125, 7.765625, -1.5, 8.78125, 8.78125, false)),
    glyph("\\earth", true, "default", 12.0, "rm", Metrics::new(8.7890625, 10.28125, 6.734375, 1.03125, 7.765625, -0.171875, 10.109375, 10.109375, false)),
    glyph("\\mars", true, "default", 12.0, "rm", Metrics::new(10.7578125, 8.8125, 9.015625, 0.953125, 9.96875, -0.171875, 8.640625, 8.640625, false)),
    glyph("\\jupiter", true, "default", 12.0, "rm", Metrics::new(10.7578125, 8.765625, 6.78125, 1.984375, 8.765625, 0.0, 8.765625, 8.765625, false)),
    glyph("\\saturn", true, "default", 12.0, "rm", Metrics::new(10.7578125, 8.765625, 5.5, 2.625, 8.125, 0.0, 8.765625, 8.765625, false)),
    glyph("\\uranus", true, "default", 12.0, "rm", Metrics::new(10.7578125, 8.765625, 7.84375, 1.453125, 9.296875, 0.0, 8.765625, 8.765625, false)),
    glyph("\\neptune", true, "default", 12.0, "rm", Metrics::new(10.7578125, 8.765625, 7.703125, 1.53125, 9.234375, 0.0, 8.765625, 8.765625, false)),
    glyph("\\pluto", true, "default", 12.0, "rm", Metrics::new(10.7578125, 8.765625, 4.984375, 2.890625, 7.875, 0.0, 8.765625, 8.765625, false)),
    glyph("\\male", true, "default", 12.0, "rm", Metrics::new(10.7578125, 8.8125, 9.015625, 0.953125, 9.96875, -0.171875, 8.640625, 8.640625, false)),
    glyph("\\female", true, "default", 12.0, "rm", Metrics::new(8.7890625, 10.28125, 6.734375, 1.03125, 7.765625, -1.5, 8.78125, 8.78125, false)),
    glyph("\\circledR", true, "default", 12.0, "rm", Metrics::new(12.0, 8.703125, 8.6875, 1.65625, 10.34375, 0.0, 8.703125, 8.703125, false)),
    glyph("\\yen", true, "default", 12.0, "rm", Metrics::new(7.634765625, 8.75, 6.65625, 0.484375, 7.140625, 0.0, 8.75, 8.75, false)),
    glyph("\\sterling", true, "default", 12.0, "rm", Metrics::new(7.634765625, 8.90625, 5.828125, 0.75, 6.578125, 0.0, 8.90625, 8.90625, false)),
    glyph("\\cent", true, "default", 12.0, "rm", Metrics::new(7.634765625, 10.21875, 5.1875, 1.015625, 6.203125, -1.828125, 8.390625, 8.390625, false)),
    glyph("\\backprime", true, "default", 12.0, "rm", Metrics::new(2.724609375, 2.1875, 2.203125, 0.234375, 2.4375, 6.5625, 8.75, 8.75, false)),
    glyph("\\dag", true, "default", 12.0, "rm", Metrics::new(6.0, 9.90625, 5.34375, 0.328125, 5.671875, -1.15625, 8.75, 8.75, false)),
    glyph("\\ddag", true, "default", 12.0, "rm", Metrics::new(6.0, 9.90625, 5.34375, 0.328125, 5.671875, -1.15625, 8.75, 8.75, false)),
    glyph("é", true, "default", 12.0, "rm", Metrics::new(7.3828125, 9.765625, 6.09375, 0.65625, 6.75, -0.171875, 9.59375, 9.59375, false)),
    glyph(" ", true, "default", 12.0, "rm", Metrics::new(3.814453125, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, false)),
    glyph("a", true, "it", 10.0, "it", Metrics::new(6.1279296875, 5.734375, 5.0625, 0.40625, 5.46875, -0.140625, 5.59375, 5.59375, true)),
    glyph("b", true, "it", 10.0, "it", Metrics::new(6.34765625, 7.734375, 5.515625, 0.359375, 5.875, -0.140625, 7.59375, 7.59375, true)),
    glyph("c", true, "it", 10.0, "it", Metrics::new(5.498046875, 5.734375, 4.90625, 0.453125, 5.359375, -0.140625, 5.59375, 5.59375, true)),
    glyph("d", true, "it", 10.0, "it", Metrics::new(6.34765625, 7.734375, 5.9375, 0.453125, 6.390625, -0.140625, 7.59375, 7.59375, true)),
    glyph("e", true, "it", 10.0, "it", Metrics::new(6.15234375, 5.734375, 5.25, 0.453125, 5.703125, -0.140625, 5.59375, 5.59375, true)),
    glyph("f", true, "it", 10.0, "it", Metrics::new(3.5205078125, 7.59375, 4.109375, 0.671875, 4.78125, 0.0, 7.59375, 7.59375, true)),
    glyph("g", true, "it", 10.0, "it", Metrics::new(6.34765625, 7.671875, 5.640625, 0.328125, 5.96875, -2.078125, 5.59375, 5.59375, true)),
    glyph("h", true, "it", 10.0, "it", Metrics::new(6.337890625, 7.59375, 5.296875, 0.359375, 5.65625, 0.0, 7.59375, 7.59375, true)),
    glyph("i", true, "it", 10.0, "it", Metrics::new(2.7783203125, 7.59375, 2.375, 0.359375, 2.734375, 0.0, 7.59375, 7.59375, true)),
    glyph("j", true, "it", 10.0, "it", Metrics::new(2.7783203125, 9.671875, 3.890625, -1.125, 2.765625, -2.078125, 7.59375, 7.59375, true)),
    glyph("k", true, "it", 10.0, "it", Metrics::new(5.791015625, 7.59375, 5.765625, 0.359375, 6.125, 0.0, 7.59375, 7.59375, true)),
    glyph("l", true, "it", 10.0, "it", Metrics::new(2.7783203125, 7.59375, 2.375, 0.359375, 2.734375, 0.0, 7.59375, 7.59375, true)),
    glyph("m", true, "it", 10.0, "it", Metrics::new(9.7412109375, 5.59375, 8.703125, 0.359375, 9.0625, 0.0, 5.59375, 5.59375, true)),
    glyph("n", true, "it", 10.0, "it", Metrics::new(6.337890625, 5.59375, 5.296875, 0.359375, 5.65625, 0.0, 5.59375, 5.59375, true)),
    glyph("o", true, "it", 10.0, "it", Metrics::new(6.1181640625, 5.734375, 5.203125, 0.453125, 5.65625, -0.140625, 5.59375, 5.59375, true)),
    glyph("p", true, "it", 10.0, "it", Metrics::new(6.34765625, 7.671875, 5.921875, -0.03125, 5.890625, -2.078125, 5.59375, 5.59375, true)),
    glyph("q", true, "it", 10.0, "it", Metrics::new(6.34765625, 7.65625, 5.515625, 0.453125, 5.96875, -2.0625, 5.59375, 5.59375, true)),
    glyph("r", true, "it", 10.0, "it", Metrics::new(4.111328125, 5.59375, 4.265625, 0.359375, 4.625, 0.0, 5.59375, 5.59375, true)),
    glyph("s", true, "it", 10.0, "it", Metrics::new(5.2099609375, 5.734375, 4.890625, 0.109375, 5.0, -0.140625, 5.59375, 5.59375, true)),
    glyph("t", true, "it", 10.0, "it", Metrics::new(3.9208984375, 7.015625, 3.59375, 0.640625, 4.234375, 0.0, 7.015625, 7.015625, true)),
    glyph("u", true, "it", 10.0, "it", Metrics::new(6.337890625, 5.609375, 5.3125, 0.578125, 5.890625, -0.140625, 5.46875, 5.46875, true)),
    glyph("v", true, "it", 10.0, "it", Metrics::new(5.91796875, 5.46875, 5.328125, 0.71875, 6.046875, 0.0, 5.46875, 5.46875, true)),
    glyph("w", true, "it", 10.0, "it", Metrics::new(8.1787109375, 5.46875, 7.34375, 0.84375, 8.1875, 0.0, 5.46875, 5.46875, true)),
    glyph("x", true, "it", 10.0, "it", Metrics::new(5.91796875, 5.46875, 6.265625, -0.265625, 6.0, 0.0, 5.46875, 5.46875, true)),
    glyph("y", true, "it", 10.0, "it", Metrics::new(5.91796875, 7.546875, 6.28125, -0.25, 6.03125, -2.078125, 5.46875, 5.46875, true)),
    glyph("z", true, "it", 10.0, "it", Metrics::new(5.2490234375, 5.46875, 5.46875, -0.03125, 5.4375, 0.0, 5.46875, 5.46875, true)),
    glyph("A", true, "it", 10.0, "it", Metrics::new(6.8408203125, 7.296875, 6.6875, -0.53125, 6.15625, 0.0, 7.296875, 7.296875, true)),
    glyph("B", true, "it", 10.0, "it", Metrics::new(6.8603515625, 7.296875, 5.984375, 0.265625, 6.25, 0.0, 7.296875, 7.296875, true)),
    glyph("C", true, "it", 10.0, "it", Metrics::new(6.982421875, 7.5625, 6.53125, 0.421875, 6.953125, -0.140625, 7.421875, 7.421875, true)),
    glyph("D", true, "it", 10.0, "it", Metrics::new(7.7001953125, 7.296875, 6.953125, 0.265625, 7.21875, 0.0, 7.296875, 7.296875, true)),
    glyph("E", true, "it", 10.0, "it", Metrics::new(6.318359375, 7.296875, 6.03125, 0.265625, 6.296875, 0.0, 7.296875, 7.296875, true)),
    glyph("F", true, "it", 10.0, "it", Metrics::new(5.751953125, 7.296875, 5.609375, 0.265625, 5.875, 0.0, 7.296875, 7.296875, true)),
    glyph("G", true, "it", 10.0, "it", Metrics::new(7.7490234375, 7.5625, 6.796875, 0.453125, 7.25, -0.140625, 7.421875, 7.421875, true)),
    glyph("H", true, "it", 10.0, "it", Metrics::new(7.51953125, 7.296875, 6.984375, 0.265625, 7.25, 0.0, 7.296875, 7.296875, true)),
    glyph("I", true, "it", 10.0, "it", Metrics::new(2.94921875, 7.296875, 2.421875, 0.265625, 2.6875, 0.0, 7.296875, 7.296875, true)),
    glyph("J", true, "it", 10.0, "it", Metrics::new(2.94921875, 9.296875, 4.296875, -1.640625, 2.65625, -2.0, 7.296875, 7.296875, true)),
    glyph("K", true, "it", 10.0, "it", Metrics::new(6.5576171875, 7.296875, 6.953125, 0.265625, 7.21875, 0.0, 7.296875, 7.296875, true)),
    glyph("L", true, "it", 10.0, "it", Metrics::new(5.5712890625, 7.296875, 4.703125, 0.265625, 4.96875, 0.0, 7.296875, 7.296875, true)),
    glyph("M", true, "it", 10.0, "it", Metrics::new(8.6279296875, 7.296875, 8.09375, 0.265625, 8.359375, 0.0, 7.296875, 7.296875, true)),
    glyph("N", true, "it", 10.0, "it", Metrics::new(7.48046875, 7.296875, 6.953125, 0.265625, 7.21875, 0.0, 7.296875, 7.296875, true)),
    glyph("O", true, "it", 10.0, "it", Metrics::new(7.87109375, 7.5625, 7.0625, 0.40625, 7.46875, -0.140625, 7.421875, 7.421875, true)),
    glyph("P", true, "it", 10.0, "it", Metrics::new(6.0302734375, 7.296875, 5.75, 0.265625, 6.015625, 0.0, 7.296875, 7.296875, true)),
    glyph("Q", true, "it", 10.0, "it", Metrics::new(7.87109375, 8.703125, 7.0625, 0.40625, 7.46875, -1.28125, 7.421875, 7.421875, true)),
    glyph("R", true, "it", 10.0, "it", Metrics::new(6.9482421875, 7.296875, 5.734375, 0.265625, 6.0, 0.0, 7.296875, 7.296875, true)),
    glyph("S", true, "it", 10.0, "it", Metrics::new(6.34765625, 7.5625, 5.96875, 0.0625, 6.03125, -0.140625, 7.421875, 7.421875, true)),
    glyph("T", true, "it", 10.0, "it", Metrics::new(6.1083984375, 7.296875, 6.328125, 0.4375, 6.765625, 0.0, 7.296875, 7.296875, true)),
    glyph("U", true, "it", 10.0, "it", Metrics::new(7.3193359375, 7.4375, 6.546875, 0.578125, 7.125, -0.140625, 7.296875, 7.296875, true)),
    glyph("V", true, "it", 10.0, "it", Metrics::new(6.8408203125, 7.296875, 6.640625, 0.78125, 7.421875, 0.0, 7.296875, 7.296875, true)),
    glyph("W", true, "it", 10.0, "it", Metrics::new(9.8876953125, 7.296875, 9.234375, 0.96875, 10.203125, 0.0, 7.296875, 7.296875, true)),
    glyph("X", true, "it", 10.0, "it", Metrics::new(6.8505859375, 7.296875, 7.453125, -0.421875, 7.03125, 0.0, 7.296875, 7.296875, true)),
    glyph("Y", true, "it", 10.0, "it", Metrics::new(6.1083984375, 7.296875, 6.140625, 0.625, 6.765625, 0.0, 7.296875, 7.296875, true)),
    glyph("Z", true, "it", 10.0, "it", Metrics::new(6.8505859375, 7.296875, 7.25, -0.21875, 7.03125, 0.0, 7.296875, 7.296875, true)),
    glyph("\\alpha", true, "it", 10.0, "it", Metrics::new(6.591796875, 5.734375, 6.171875, 0.28125, 6.453125, -0.125, 5.609375, 5.609375, true)),
    glyph("\\beta", true, "it", 10.0, "it", Metrics::new(6.3818359375, 9.734375, 6.09375, -0.015625, 6.078125, -2.078125, 7.65625, 7.65625, true)),
    glyph("\\gamma", true, "it", 10.0, "it", Metrics::new(5.91796875, 7.546875, 5.609375, 0.75, 6.359375, -2.078125, 5.46875, 5.46875, true)),
    glyph("\\delta", true, "it", 10.0, "it", Metrics::new(6.1181640625, 7.5625, 5.546875, 0.109375, 5.65625, -0.140625, 7.421875, 7.421875, true)),
    glyph("\\epsilon", true, "it", 10.0, "it", Metrics::new(6.15234375, 5.734375, 5.046875, 0.28125, 5.328125, -0.140625, 5.59375, 5.59375, true)),
    glyph("\\varepsilon", true, "it", 10.0, "it", Metrics::new(5.4052734375, 5.75, 4.65625, 0.390625, 5.046875, -0.140625, 5.609375, 5.609375, true)),
    glyph("\\zeta", true, "it", 10.0, "it", Metrics::new(5.439453125, 9.6875, 5.9375, -0.03125, 5.90625, -2.09375, 7.59375, 7.59375, true)),
    glyph("\\eta", true, "it", 10.0, "it", Metrics::new(6.337890625, 7.671875, 5.4375, 0.5625, 6.0, -2.078125, 5.59375, 5.59375, true)),
    glyph("\\theta", true, "it", 10.0, "it", Metrics::new(6.1181640625, 7.78125, 5.71875, 0.203125, 5.921875, -0.109375, 7.671875, 7.671875, true)),
    glyph("\\vartheta", true, "it", 10.0, "it", Metrics::new(6.19140625, 7.78125, 5.828125, 0.15625, 5.984375, -0.109375, 7.671875, 7.671875, true)),
    glyph("\\iota", true, "it", 10.0, "it", Metrics::new(3.3837890625, 5.46875, 2.1875, 0.46875, 2.65625, 0.0, 5.46875, 5.46875, true)),
    glyph("\\kappa", true, "it", 10.0, "it", Metrics::new(5.8935546875, 5.46875, 5.4375, 0.40625, 5.84375, 0.0, 5.46875, 5.46875, true)),
    glyph("\\lambda", true, "it", 10.0, "it", Metrics::new(5.91796875, 7.59375, 5.328125, -0.4375, 4.890625, 0.0, 7.59375, 7.59375, true)),
    glyph("\\mu", true, "it", 10.0, "it", Metrics::new(6.3623046875, 7.546875, 6.046875, -0.125, 5.921875, -2.078125, 5.46875, 5.46875, true)),
    glyph("\\nu", true, "it", 10.0, "it", Metrics::new(5.5859375, 5.46875, 4.453125, 0.890625, 5.34375, 0.0, 5.46875, 5.46875, true)),
    glyph("\\xi", true, "it", 10.0, "it", Metrics::new(5.576171875, 9.6875, 5.671875, -0.03125, 5.640625, -2.09375, 7.59375, 7.59375, true)),
    glyph("\\pi", true, "it", 10.0, "it", Metrics::new(6.0205078125, 5.65625, 5.609375, 0.546875, 6.15625, -0.1875, 5.46875, 5.46875, true)),
    glyph("\\varpi", true, "it", 10.0, "it", Metrics::new(8.3740234375, 5.609375, 8.46875, 0.109375, 8.578125, -0.140625, 5.46875, 5.46875, true)),
    glyph("\\rho", true, "it", 10.0, "it", Metrics::new(6.34765625, 7.671875, 6.078125, 0.15625, 6.234375, -2.078125, 5.59375, 5.59375, true)),
    glyph("\\varrho", true, "it", 10.0, "it", Metrics::new(6.34765625, 7.671875, 6.109375, 0.125, 6.234375, -2.078125, 5.59375, 5.59375, true)),
    glyph("\\sigma", true, "it", 10.0, "it", Metrics::new(6.337890625, 5.609375, 6.296875, 0.296875, 6.59375, -0.140625, 5.46875, 5.46875, true)),
    glyph("\\varsigma", true, "it", 10.0, "it", Metrics::new(5.869140625, 7.6875, 5.078125, 0.484375, 5.5625, -2.09375, 5.59375, 5.59375, true)),
    glyph("\\tau", true, "it", 10.0, "it", Metrics::new(6.0205078125, 5.46875, 5.21875, 0.84375, 6.0625, 0.0, 5.46875, 5.46875, true)),
    glyph("\\upsilon", true, "it", 10.0, "it", Metrics::new(5.7861328125, 5.46875, 5.015625, 0.40625, 5.421875, 0.0, 5.46875, 5.46875, true)),
    glyph("\\phi", true, "it", 10.0, "it", Metrics::new(6.5966796875, 9.671875, 6.0, 0.28125, 6.28125, -2.078125, 7.59375, 7.59375, true)),
    glyph("\\varphi", true, "it", 10.0, "it", Metrics::new(6.5966796875, 7.59375, 6.0, 0.484375, 6.484375, -2.078125, 5.515625, 5.515625, true)),
    glyph("\\chi", true, "it", 10.0, "it", Metrics::new(5.91796875, 7.546875, 6.65625, -0.4375, 6.21875, -2.078125, 5.46875, 5.46875, true)),
    glyph("\\psi", true, "it", 10.0, "it", Metrics::new(6.5966796875, 7.546875, 6.3125, 0.4375, 6.75, -2.078125, 5.46875, 5.46875, true)),
    glyph("\\omega", true, "it", 10.0, "it", Metrics::new(8.3740234375, 5.609375, 7.828125, 0.109375, 7.9375, -0.140625, 5.46875, 5.46875, true)),
    glyph("\\Gamma", true, "it", 10.0, "it", Metrics::new(5.5712890625, 7.296875, 4.53125, 0.984375, 5.515625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Delta", true, "it", 10.0, "it", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Theta", true, "it", 10.0, "it", Metrics::new(7.87109375, 7.5625, 6.75, 0.5625, 7.3125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\Lambda", true, "it", 10.0, "it", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Xi", true, "it", 10.0, "it", Metrics::new(6.318359375, 7.296875, 4.5, 0.984375, 5.484375, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Pi", true, "it", 10.0, "it", Metrics::new(7.51953125, 7.296875, 5.546875, 0.984375, 6.53125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Sigma", true, "it", 10.0, "it", Metrics::new(6.318359375, 7.296875, 4.6875, 0.984375, 5.671875, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Upsilon", true, "it", 10.0, "it", Metrics::new(6.1083984375, 7.296875, 6.140625, -0.015625, 6.125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Phi", true, "it", 10.0, "it", Metrics::new(7.87109375, 7.296875, 6.75, 0.5625, 7.3125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Psi", true, "it", 10.0, "it", Metrics::new(7.87109375, 7.296875, 6.75, 0.5625, 7.3125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Omega", true, "it", 10.0, "it", Metrics::new(7.6416015625, 7.375, 6.890625, 0.375, 7.265625, 0.0, 7.375, 7.375, false)),
    glyph("\\sum", true, "it", 10.0, "it", Metrics::new(6.73828125, 9.109375, 6.40625, 0.125, 6.53125, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\prod", true, "it", 10.0, "it", Metrics::new(7.568359375, 9.109375, 6.03125, 0.765625, 6.796875, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\coprod", true, "it", 10.0, "it", Metrics::new(7.568359375, 9.109375, 6.03125, 0.765625, 6.796875, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\int", true, "it", 10.0, "it", Metrics::new(5.2099609375, 9.6875, 4.0625, 0.578125, 4.640625, -2.125, 7.5625, 7.5625, true)),
    glyph("\\oint", true, "it", 10.0, "it", Metrics::new(5.2099609375, 9.6875, 4.0625, 0.578125, 4.640625, -2.125, 7.5625, 7.5625, true)),
    glyph("\\iint", true, "it", 10.0, "it", Metrics::new(7.890625, 9.6875, 6.734375, 0.578125, 7.3125, -2.125, 7.5625, 7.5625, false)),
    glyph("\\iiint", true, "it", 10.0, "it", Metrics::new(10.5712890625, 9.6875, 9.421875, 0.578125, 10.0, -2.125, 7.5625, 7.5625, false)),
    glyph("\\bigcap", true, "it", 10.0, "it", Metrics::new(8.203125, 9.109375, 6.828125, 0.6875, 7.515625, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\bigcup", true, "it", 10.0, "it", Metrics::new(8.203125, 9.109375, 6.828125, 0.6875, 7.515625, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\bigvee", true, "it", 10.0, "it", Metrics::new(8.203125, 9.109375, 8.265625, -0.03125, 8.234375, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\bigwedge", true, "it", 10.0, "it", Metrics::new(8.203125, 9.109375, 8.265625, -0.03125, 8.234375, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\bigoplus", true, "it", 10.0, "it", Metrics::new(10.0, 9.453125, 9.4375, 0.28125, 9.71875, -1.984375, 7.46875, 7.46875, false)),
    glyph("\\bigotimes", true, "it", 10.0, "it", Metrics::new(10.0, 9.453125, 9.4375, 0.28125, 9.71875, -1.984375, 7.46875, 7.46875, false)),
    glyph("\\pm", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.265625, 6.25, 1.0625, 7.3125, 0.0, 6.265625, 6.265625, false)),
    glyph("\\mp", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.265625, 6.25, 1.0625, 7.3125, 0.0, 6.265625, 6.265625, false)),
    glyph("\\times", true, "it", 10.0, "it", Metrics::new(8.37890625, 5.65625, 5.640625, 1.375, 7.015625, 0.3125, 5.96875, 5.96875, false)),
    glyph("\\div", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.8125, 6.25, 1.0625, 7.3125, 0.734375, 5.546875, 5.546875, false)),
    glyph("\\cdot", true, "it", 10.0, "it", Metrics::new(3.1787109375, 1.234375, 1.03125, 1.0625, 2.09375, 2.859375, 4.09375, 4.09375, false)),
    glyph("\\ast", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.265625, 5.828125, 1.28125, 7.109375, 0.0, 6.265625, 6.265625, false)),
    glyph("\\star", true, "it", 10.0, "it", Metrics::new(6.259765625, 3.640625, 3.828125, 1.21875, 5.046875, 1.484375, 5.125, 5.125, false)),
    glyph("\\circ", true, "it", 10.0, "it", Metrics::new(6.259765625, 3.109375, 3.09375, 1.578125, 4.671875, 1.59375, 4.703125, 4.703125, false)),
    glyph("\\bullet", true, "it", 10.0, "it", Metrics::new(6.259765625, 2.890625, 2.890625, 1.6875, 4.578125, 1.6875, 4.578125, 4.578125, false)),
    glyph("\\cap", true, "it", 10.0, "it", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\cup", true, "it", 10.0, "it", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\uplus", true, "it", 10.0, "it", Metrics::new(7.3193359375, 5.78125, 4.734375, 1.296875, 6.03125, 0.03125, 5.8125, 5.8125, false)),
    glyph("\\sqcap", true, "it", 10.0, "it", Metrics::new(7.802734375, 6.265625, 5.6875, 1.0625, 6.75, 0.0, 6.265625, 6.265625, false)),
    glyph("\\sqcup", true, "it", 10.0, "it", Metrics::new(7.802734375, 6.265625, 5.6875, 1.0625, 6.75, 0.0, 6.265625, 6.265625, false)),
    glyph("\\vee", true, "it", 10.0, "it", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\wedge", true, "it", 10.0, "it", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\setminus", true, "it", 10.0, "it", Metrics::new(6.3671875, 8.21875, 3.375, 1.921875, 5.296875, -0.53125, 7.6875, 7.6875, false)),
    glyph("\\wr", true, "it", 10.0, "it", Metrics::new(3.75, 6.265625, 1.71875, 1.015625, 2.734375, 0.0, 6.265625, 6.265625, false)),
    glyph("\\diamond", true, "it", 10.0, "it", Metrics::new(6.259765625, 4.984375, 4.984375, 0.640625, 5.625, 0.640625, 5.625, 5.625, false)),
    glyph("\\oplus", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\ominus", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\otimes", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\oslash", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\odot", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\bigcirc", true, "it", 10.0, "it", Metrics::new(8.7255859375, 7.703125, 7.625, 0.546875, 8.171875, -1.25, 6.453125, 6.453125, false)),
    glyph("\\dagger", true, "it", 10.0, "it", Metrics::new(5.0, 8.265625, 4.4375, 0.28125, 4.71875, -0.96875, 7.296875, 7.296875, false)),
    glyph("\\ddagger", true, "it", 10.0, "it", Metrics::new(5.0, 8.265625, 4.4375, 0.28125, 4.71875, -0.96875, 7.296875, 7.296875, false)),
    glyph("\\leq", true, "it", 10.0, "it", Metrics::new(8.37890625, 5.828125, 6.25, 1.0625, 7.3125, 0.0, 5.828125, 5.828125, false)),
    glyph("\\geq", true, "it", 10.0, "it", Metrics::new(8.37890625, 5.828125, 6.25, 1.0625, 7.3125, 0.0, 5.828125, 5.828125, false)),
    glyph("\\neq", true, "it", 10.0, "it", Metrics::new(8.37890625, 5.890625, 6.25, 1.0625, 7.3125, 0.1875, 6.078125, 6.078125, false)),
    glyph("\\equiv", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.46875, 6.25, 1.0625, 7.3125, 0.90625, 5.375, 5.375, false)),
    glyph("\\sim", true, "it", 10.0, "it", Metrics::new(8.37890625, 1.71875, 6.25, 1.0625, 7.3125, 2.28125, 4.0, 4.0, false)),
    glyph("\\simeq", true, "it", 10.0, "it", Metrics::new(8.37890625, 3.21875, 6.25, 1.0625, 7.3125, 1.71875, 4.9375, 4.9375, false)),
    glyph("\\approx", true, "it", 10.0, "it", Metrics::new(8.37890625, 3.609375, 6.25, 1.0625, 7.3125, 1.328125, 4.9375, 4.9375, false)),
    glyph("\\cong", true, "it", 10.0, "it", Metrics::new(8.37890625, 5.03125, 6.25, 1.0625, 7.3125, 0.90625, 5.9375, 5.9375, false)),
    glyph("\\propto", true, "it", 10.0, "it", Metrics::new(7.1435546875, 3.75, 4.984375, 1.078125, 6.0625, 1.125, 4.875, 4.875, false)),
    glyph("\\subset", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.671875, 6.390625, 1.0, 7.390625, 0.796875, 5.46875, 5.46875, false)),
    glyph("\\supset", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.671875, 6.390625, 1.0, 7.390625, 0.796875, 5.46875, 5.46875, false)),
    glyph("\\subseteq", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.140625, 6.390625, 0.921875, 7.3125, 0.0, 6.140625, 6.140625, false)),
    glyph("\\supseteq", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.140625, 6.390625, 1.0625, 7.453125, 0.0, 6.140625, 6.140625, false)),
    glyph("\\in", true, "it", 10.0, "it", Metrics::new(8.7109375, 7.1875, 7.0, 0.859375, 7.859375, -0.09375, 7.09375, 7.09375, false)),
    glyph("\\ni", true, "it", 10.0, "it", Metrics::new(8.7109375, 7.1875, 7.0, 0.859375, 7.859375, -0.09375, 7.09375, 7.09375, false)),
    glyph("\\notin", true, "it", 10.0, "it", Metrics::new(8.7109375, 9.734375, 7.0, 0.859375, 7.859375, -1.375, 8.359375, 8.359375, false)),
    glyph("\\ll", true, "it", 10.0, "it", Metrics::new(10.46875, 5.875, 9.03125, 0.71875, 9.75, 0.21875, 6.09375, 6.09375, false)),
    glyph("\\gg", true, "it", 10.0, "it", Metrics::new(10.46875, 5.875, 9.03125, 0.71875, 9.75, 0.21875, 6.09375, 6.09375, false)),
    glyph("\\prec", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.015625, 6.25, 1.0625, 7.3125, -0.375, 6.640625, 6.640625, false)),
    glyph("\\succ", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.015625, 6.25, 1.0625, 7.3125, -0.375, 6.640625, 6.640625, false)),
    glyph("\\mid", true, "it", 10.0, "it", Metrics::new(5.0, 9.84375, 0.78125, 2.109375, 2.890625, -2.140625, 7.703125, 7.703125, false)),
    glyph("\\parallel", true, "it", 10.0, "it", Metrics::new(5.0, 9.84375, 2.34375, 1.328125, 3.671875, -2.140625, 7.703125, 7.703125, false)),
    glyph("\\vdash", true, "it", 10.0, "it", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\dashv", true, "it", 10.0, "it", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\models", true, "it", 10.0, "it", Metrics::new(5.205078125, 7.0, 3.5, 0.859375, 4.359375, 0.0, 7.0, 7.0, false)),
    glyph("\\asymp", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.15625, 6.25, 1.0625, 7.3125, 1.046875, 5.203125, 5.203125, false)),
    glyph("\\doteq", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.53125, 6.25, 1.0625, 7.3125, 1.71875, 6.25, 6.25, false)),
    glyph("\\bowtie", true, "it", 10.0, "it", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\leftarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\rightarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\uparrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.328125, 4.28125, 2.046875, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\downarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.328125, 4.28125, 2.046875, 6.328125, -0.03125, 7.296875, 7.296875, false)),
    glyph("\\leftrightarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.40625, 0.484375, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\updownarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.40625, 4.28125, 2.046875, 6.328125, -0.078125, 7.328125, 7.328125, false)),
    glyph("\\Leftarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Rightarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Uparrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.328125, 4.265625, 2.0625, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\Downarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.328125, 4.265625, 2.0625, 6.328125, -0.03125, 7.296875, 7.296875, false)),
    glyph("\\Leftrightarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.40625, 0.484375, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Updownarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.40625, 4.28125, 2.046875, 6.328125, -0.078125, 7.328125, 7.328125, false)),
    glyph("\\mapsto", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\longleftarrow", true, "it", 10.0, "it", Metrics::new(14.3359375, 4.28125, 13.28125, 0.484375, 13.765625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\longrightarrow", true, "it", 10.0, "it", Metrics::new(14.3359375, 4.28125, 13.265625, 0.578125, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\hookleftarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.65625, 7.3125, 0.484375, 7.796875, 1.0, 5.65625, 5.65625, false)),
    glyph("\\hookrightarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.65625, 7.3125, 0.578125, 7.890625, 1.0, 5.65625, 5.65625, false)),
    glyph("\\nearrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 5.625, 5.625, 1.40625, 7.03125, 0.25, 5.875, 5.875, false)),
    glyph("\\searrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 5.625, 5.625, 1.40625, 7.03125, 0.25, 5.875, 5.875, false)),
    glyph("\\swarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 5.625, 5.625, 1.40625, 7.03125, 0.25, 5.875, 5.875, false)),
    glyph("\\nwarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 5.625, 5.625, 1.40625, 7.03125, 0.25, 5.875, 5.875, false)),
    glyph("\\leftharpoonup", true, "it", 10.0, "it", Metrics::new(8.37890625, 2.5625, 7.328125, 0.484375, 7.8125, 2.71875, 5.28125, 5.28125, false)),
    glyph("\\rightharpoonup", true, "it", 10.0, "it", Metrics::new(8.37890625, 2.5625, 7.3125, 0.578125, 7.890625, 2.71875, 5.28125, 5.28125, false)),
    glyph("\\rightleftharpoons", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.140625, 7.40625, 0.484375, 7.890625, 0.0625, 6.203125, 6.203125, false)),
    glyph("\\infty", true, "it", 10.0, "it", Metrics::new(8.330078125, 3.75, 6.171875, 1.078125, 7.25, 1.125, 4.875, 4.875, false)),
    glyph("\\partial", true, "it", 10.0, "it", Metrics::new(5.1708984375, 6.765625, 4.234375, 0.46875, 4.703125, -0.140625, 6.625, 6.625, false)),
    glyph("\\nabla", true, "it", 10.0, "it", Metrics::new(6.689453125, 7.1875, 6.75, -0.03125, 6.71875, 0.0, 7.1875, 7.1875, false)),
    glyph("\\forall", true, "it", 10.0, "it", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\exists", true, "it", 10.0, "it", Metrics::new(6.318359375, 7.296875, 4.6875, 0.984375, 5.671875, 0.0, 7.296875, 7.296875, false)),
    glyph("\\neg", true, "it", 10.0, "it", Metrics::new(8.37890625, 2.796875, 6.25, 1.0625, 7.3125, 1.40625, 4.203125, 4.203125, false)),
    glyph("\\emptyset", true, "it", 10.0, "it", Metrics::new(8.7109375, 7.1875, 7.203125, 0.75, 7.953125, -0.09375, 7.09375, 7.09375, false)),
    glyph("\\aleph", true, "it", 10.0, "it", Metrics::new(7.451171875, 7.5625, 6.625, 0.5, 7.125, -0.140625, 7.421875, 7.421875, true)),
    glyph("\\hbar", true, "it", 10.0, "it", Metrics::new(6.9482421875, 7.59375, 5.3125, 0.453125, 5.765625, 0.0, 7.59375, 7.59375, true)),
    glyph("\\ell", true, "it", 10.0, "it", Metrics::new(4.130859375, 7.5625, 3.671875, -0.140625, 3.53125, -0.140625, 7.421875, 7.421875, true)),
    glyph("\\wp", true, "it", 10.0, "it", Metrics::new(6.97265625, 7.171875, 6.046875, 0.53125, 6.578125, -2.21875, 4.953125, 4.953125, false)),
    glyph("\\Re", true, "it", 10.0, "it", Metrics::new(8.1396484375, 7.5625, 7.625, 0.40625, 8.03125, -0.140625, 7.421875, 7.421875, true)),
    glyph("\\Im", true, "it", 10.0, "it", Metrics::new(6.97265625, 7.5625, 6.078125, 0.515625, 6.59375, -0.140625, 7.421875, 7.421875, true)),
    glyph("\\prime", true, "it", 10.0, "it", Metrics::new(2.2705078125, 1.828125, 1.828125, 0.203125, 2.03125, 5.46875, 7.296875, 7.296875, false)),
    glyph("\\angle", true, "it", 10.0, "it", Metrics::new(8.96484375, 7.296875, 7.0, 0.859375, 7.859375, 0.0, 7.296875, 7.296875, false)),
    glyph("\\triangle", true, "it", 10.0, "it", Metrics::new(7.6904296875, 7.65625, 7.625, 0.03125, 7.65625, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\surd", true, "it", 10.0, "it", Metrics::new(6.3720703125, 8.3125, 6.078125, 0.296875, 6.375, -0.203125, 8.109375, 8.109375, false)),
    glyph("\\top", true, "it", 10.0, "it", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\bot", true, "it", 10.0, "it", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\flat", true, "it", 10.0, "it", Metrics::new(4.716796875, 7.34375, 3.03125, 0.890625, 3.921875, -0.03125, 7.3125, 7.3125, false)),
    glyph("\\natural", true, "it", 10.0, "it", Metrics::new(3.57421875, 7.3125, 1.890625, 0.84375, 2.734375, 0.0, 7.3125, 7.3125, false)),
    glyph("\\sharp", true, "it", 10.0, "it", Metrics::new(4.8388671875, 7.3125, 3.15625, 0.84375, 4.0, 0.0, 7.3125, 7.3125, false)),
    glyph("\\clubsuit", true, "it", 10.0, "it", Metrics::new(8.96484375, 7.28125, 6.734375, 1.109375, 7.84375, 0.0, 7.28125, 7.28125, false)),
    glyph("\\diamondsuit", true, "it", 10.0, "it", Metrics::new(8.96484375, 7.28125, 5.59375, 1.6875, 7.28125, 0.0, 7.28125, 7.28125, false)),
    glyph("\\heartsuit", true, "it", 10.0, "it", Metrics::new(8.96484375, 7.265625, 7.15625, 0.90625, 8.0625, 0.0, 7.265625, 7.265625, false)),
    glyph("\\spadesuit", true, "it", 10.0, "it", Metrics::new(8.96484375, 7.28125, 5.8125, 1.578125, 7.390625, 0.0, 7.28125, 7.28125, false)),
    glyph("\\ldots", true, "it", 10.0, "it", Metrics::new(10.0, 1.234375, 7.6875, 1.15625, 8.84375, 0.0, 1.234375, 1.234375, false)),
    glyph("\\cdots", true, "it", 10.0, "it", Metrics::new(10.0, 1.25, 7.6875, 1.15625, 8.84375, 2.484375, 3.734375, 3.734375, false)),
    glyph("\\vdots", true, "it", 10.0, "it", Metrics::new(10.0, 8.078125, 1.03125, 4.484375, 5.515625, -0.921875, 7.15625, 7.15625, false)),
    glyph("\\ddots", true, "it", 10.0, "it", Metrics::new(10.0, 8.078125, 7.6875, 1.15625, 8.84375, -0.921875, 7.15625, 7.15625, false)),
    glyph("\\langle", true, "it", 10.0, "it", Metrics::new(3.9013671875, 8.90625, 2.203125, 0.890625, 3.09375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rangle", true, "it", 10.0, "it", Metrics::new(3.9013671875, 8.90625, 2.21875, 0.796875, 3.015625, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\lfloor", true, "it", 10.0, "it", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.859375, 2.9375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rfloor", true, "it", 10.0, "it", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.96875, 3.046875, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\lceil", true, "it", 10.0, "it", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.859375, 2.9375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rceil", true, "it", 10.0, "it", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.96875, 3.046875, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\lbrace", true, "it", 10.0, "it", Metrics::new(6.3623046875, 9.21875, 3.859375, 1.25, 5.109375, -1.625, 7.59375, 7.59375, false)),
    glyph("\\rbrace", true, "it", 10.0, "it", Metrics::new(6.3623046875, 9.21875, 3.859375, 1.25, 5.109375, -1.625, 7.59375, 7.59375, false)),
    glyph("\\vert", true, "it", 10.0, "it", Metrics::new(3.369140625, 10.0, 0.828125, 1.265625, 2.09375, -2.359375, 7.640625, 7.640625, false)),
    glyph("\\Vert", true, "it", 10.0, "it", Metrics::new(5.0, 10.0, 2.453125, 1.265625, 3.71875, -2.359375, 7.640625, 7.640625, false)),
    glyph("\\backslash", true, "it", 10.0, "it", Metrics::new(3.369140625, 8.21875, 3.375, 0.0, 3.375, -0.921875, 7.296875, 7.296875, false)),
    glyph("\\S", true, "it", 10.0, "it", Metrics::new(5.0, 8.375, 4.09375, 0.453125, 4.546875, -0.953125, 7.421875, 7.421875, false)),
    glyph("\\P", true, "it", 10.0, "it", Metrics::new(6.3623046875, 8.265625, 4.515625, 0.765625, 5.28125, -0.96875, 7.296875, 7.296875, false)),
    glyph("\\copyright", true, "it", 10.0, "it", Metrics::new(10.0, 7.25, 7.25, 1.375, 8.625, 0.0, 7.25, 7.25, false)),
    glyph("\\degree", true, "it", 10.0, "it", Metrics::new(5.0, 3.09375, 3.09375, 0.953125, 4.046875, 4.328125, 7.421875, 7.421875, false)),
    glyph("\\imath", true, "it", 10.0, "it", Metrics::new(2.7783203125, 5.46875, 1.953125, 0.359375, 2.3125, 0.0, 5.46875, 5.46875, true)),
    glyph("\\jmath", true, "it", 10.0, "it", Metrics::new(2.7783203125, 7.546875, 3.46875, -1.125, 2.34375, -2.078125, 5.46875, 5.46875, true)),
    glyph("\\nleftarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\nrightarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\twoheadleftarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\twoheadrightarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\leftarrowtail", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\rightarrowtail", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\mapsfrom", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\mapsup", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.328125, 4.265625, 2.0625, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\mapsdown", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.328125, 4.265625, 2.0625, 6.328125, -0.03125, 7.296875, 7.296875, false)),
    glyph("\\looparrowleft", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.65625, 7.3125, 0.484375, 7.796875, 1.0, 5.65625, 5.65625, false)),
    glyph("\\looparrowright", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.65625, 7.3125, 0.578125, 7.890625, 1.0, 5.65625, 5.65625, false)),
    glyph("\\leftrightsquigarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.40625, 0.484375, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\nleftrightarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.421875, 7.40625, 0.484375, 7.890625, 0.921875, 5.34375, 5.34375, false)),
    glyph("\\Lsh", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.4375, 4.609375, 1.6875, 6.296875, 0.0, 7.4375, 7.4375, false)),
    glyph("\\Rsh", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.4375, 4.59375, 2.09375, 6.6875, 0.0, 7.4375, 7.4375, false)),
    glyph("\\curvearrowleft", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.65625, 7.78125, 0.21875, 8.0, 2.03125, 6.6875, 6.6875, false)),
    glyph("\\curvearrowright", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.65625, 7.765625, 0.390625, 8.15625, 2.03125, 6.6875, 6.6875, false)),
    glyph("\\circlearrowleft", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.171875, 6.59375, 1.03125, 7.625, 0.625, 6.796875, 6.796875, false)),
    glyph("\\circlearrowright", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.171875, 6.59375, 0.765625, 7.359375, 0.625, 6.796875, 6.796875, false)),
    glyph("\\leftharpoondown", true, "it", 10.0, "it", Metrics::new(8.37890625, 2.546875, 7.328125, 0.484375, 7.8125, 1.0, 3.546875, 3.546875, false)),
    glyph("\\upharpoonright", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.328125, 2.546875, 3.78125, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\upharpoonleft", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.328125, 2.5625, 2.046875, 4.609375, 0.0, 7.328125, 7.328125, false)),
    glyph("\\rightharpoondown", true, "it", 10.0, "it", Metrics::new(8.37890625, 2.546875, 7.3125, 0.578125, 7.890625, 1.0, 3.546875, 3.546875, false)),
    glyph("\\downharpoonright", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.328125, 2.546875, 3.78125, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\downharpoonleft", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.328125, 2.5625, 2.046875, 4.609375, 0.0, 7.328125, 7.328125, false)),
    glyph("\\rightleftarrows", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.203125, 7.40625, 0.484375, 7.890625, -0.46875, 6.734375, 6.734375, false)),
    glyph("\\leftrightarrows", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.203125, 7.40625, 0.484375, 7.890625, -0.46875, 6.734375, 6.734375, false)),
    glyph("\\leftleftarrows", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.203125, 7.328125, 0.484375, 7.8125, -0.46875, 6.734375, 6.734375, false)),
    glyph("\\upuparrows", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.328125, 7.203125, 0.59375, 7.796875, 0.0, 7.328125, 7.328125, false)),
    glyph("\\rightrightarrows", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.203125, 7.3125, 0.578125, 7.890625, -0.46875, 6.734375, 6.734375, false)),
    glyph("\\downdownarrows", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.328125, 7.203125, 0.59375, 7.796875, -0.03125, 7.296875, 7.296875, false)),
    glyph("\\leftrightharpoons", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.140625, 7.40625, 0.484375, 7.890625, 0.0625, 6.203125, 6.203125, false)),
    glyph("\\nLeftarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\nLeftrightarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.390625, 7.40625, 0.484375, 7.890625, 0.9375, 5.328125, 5.328125, false)),
    glyph("\\nRightarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Lleftarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Rrightarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\leftsquigarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\rightsquigarrow", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\longleftrightarrow", true, "it", 10.0, "it", Metrics::new(14.3359375, 4.28125, 13.359375, 0.484375, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Longleftarrow", true, "it", 10.0, "it", Metrics::new(14.3359375, 4.28125, 13.28125, 0.484375, 13.765625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Longrightarrow", true, "it", 10.0, "it", Metrics::new(14.3359375, 4.28125, 13.265625, 0.578125, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Longleftrightarrow", true, "it", 10.0, "it", Metrics::new(14.3359375, 4.28125, 13.359375, 0.484375, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\longmapsto", true, "it", 10.0, "it", Metrics::new(14.3359375, 4.28125, 13.265625, 0.578125, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\nmid", true, "it", 10.0, "it", Metrics::new(5.0, 9.84375, 4.0, 0.5, 4.5, -2.140625, 7.703125, 7.703125, false)),
    glyph("\\nparallel", true, "it", 10.0, "it", Metrics::new(5.0, 9.84375, 4.0, 0.5, 4.5, -2.140625, 7.703125, 7.703125, false)),
    glyph("\\backsim", true, "it", 10.0, "it", Metrics::new(8.37890625, 1.71875, 6.25, 1.0625, 7.3125, 2.28125, 4.0, 4.0, false)),
    glyph("\\nsim", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.765625, 6.25, 1.0625, 7.3125, 0.765625, 5.53125, 5.53125, false)),
    glyph("\\eqsim", true, "it", 10.0, "it", Metrics::new(8.37890625, 3.21875, 6.25, 1.0625, 7.3125, 1.328125, 4.546875, 4.546875, false)),
    glyph("\\ncong", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.625, 6.25, 1.0625, 7.3125, -0.046875, 6.578125, 6.578125, false)),
    glyph("\\napprox", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.21875, 6.25, 1.0625, 7.3125, 0.03125, 6.25, 6.25, false)),
    glyph("\\approxeq", true, "it", 10.0, "it", Metrics::new(8.37890625, 5.078125, 6.25, 1.0625, 7.3125, 0.90625, 5.984375, 5.984375, false)),
    glyph("\\allequal", true, "it", 10.0, "it", Metrics::new(8.37890625, 5.03125, 6.25, 1.0625, 7.3125, 0.90625, 5.9375, 5.9375, false)),
    glyph("\\Bumpeq", true, "it", 10.0, "it", Metrics::new(8.37890625, 5.734375, 6.25, 1.0625, 7.3125, 0.265625, 6.0, 6.0, false)),
    glyph("\\bumpeq", true, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 6.25, 1.0625, 7.3125, 1.71875, 6.0, 6.0, false)),
    glyph("\\Doteq", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.234375, 6.25, 1.0625, 7.3125, 0.015625, 6.25, 6.25, false)),
    glyph("\\fallingdotseq", true, "it", 10.0, "it", Metrics::new(8.388671875, 6.21875, 6.265625, 1.0625, 7.328125, 0.03125, 6.25, 6.25, false)),
    glyph("\\risingdotseq", true, "it", 10.0, "it", Metrics::new(8.388671875, 6.21875, 6.265625, 1.0625, 7.328125, 0.03125, 6.25, 6.25, false)),
    glyph("\\coloneq", true, "it", 10.0, "it", Metrics::new(10.0, 3.25, 7.984375, 1.015625, 9.0, 1.515625, 4.765625, 4.765625, false)),
    glyph("\\eqcolon", true, "it", 10.0, "it", Metrics::new(10.0, 3.234375, 8.0, 1.0, 9.0, 1.515625, 4.75, 4.75, false)),
    glyph("\\eqcirc", true, "it", 10.0, "it", Metrics::new(8.37890625, 2.828125, 6.25, 1.0625, 7.3125, 1.71875, 4.546875, 4.546875, false)),
    glyph("\\circeq", true, "it", 10.0, "it", Metrics::new(8.37890625, 5.890625, 6.25, 1.0625, 7.3125, 1.71875, 7.609375, 7.609375, false)),
    glyph("\\wedgeq", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.40625, 6.25, 1.0625, 7.3125, 1.71875, 8.125, 8.125, false)),
    glyph("\\veeeq", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.40625, 6.25, 1.0625, 7.3125, 1.71875, 8.125, 8.125, false)),
    glyph("\\stareq", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.765625, 6.25, 1.0625, 7.3125, 1.71875, 8.484375, 8.484375, false)),
    glyph("\\triangleq", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.8125, 6.25, 1.0625, 7.3125, 1.71875, 8.53125, 8.53125, false)),
    glyph("\\nequiv", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.75, 6.25, 1.0625, 7.3125, -0.25, 6.5, 6.5, false)),
    glyph("\\leqq", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.203125, 6.265625, 1.0625, 7.328125, -0.828125, 6.375, 6.375, false)),
    glyph("\\geqq", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.203125, 6.265625, 1.0625, 7.328125, -0.828125, 6.375, 6.375, false)),
    glyph("\\lneqq", true, "it", 10.0, "it", Metrics::new(8.37890625, 8.015625, 6.265625, 1.0625, 7.328125, -1.640625, 6.375, 6.375, false)),
    glyph("\\gneqq", true, "it", 10.0, "it", Metrics::new(8.37890625, 8.015625, 6.265625, 1.0625, 7.328125, -1.640625, 6.375, 6.375, false)),
    glyph("\\between", true, "it", 10.0, "it", Metrics::new(4.638671875, 8.90625, 2.921875, 0.859375, 3.78125, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\nless", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.703125, 6.25, 1.0625, 7.3125, 0.03125, 6.734375, 6.734375, false)),
    glyph("\\ngtr", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.71875, 6.25, 1.0625, 7.3125, -0.46875, 6.25, 6.25, false)),
    glyph("\\nleq", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.6875, 6.25, 1.0625, 7.3125, -1.015625, 6.671875, 6.671875, false)),
    glyph("\\ngeq", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.6875, 6.25, 1.0625, 7.3125, -1.015625, 6.671875, 6.671875, false)),
    glyph("\\lesssim", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.375, 6.265625, 1.0625, 7.328125, -0.546875, 5.828125, 5.828125, false)),
    glyph("\\gtrsim", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.21875, 6.265625, 1.0625, 7.328125, -0.390625, 5.828125, 5.828125, false)),
    glyph("\\lessgtr", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.734375, 6.3125, 1.015625, 7.328125, -0.875, 6.859375, 6.859375, false)),
    glyph("\\gtrless", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.734375, 6.3125, 1.015625, 7.328125, -0.875, 6.859375, 6.859375, false)),
    glyph("\\preccurlyeq", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.71875, 6.25, 1.0625, 7.3125, -1.046875, 6.671875, 6.671875, false)),
    glyph("\\succcurlyeq", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.71875, 6.25, 1.0625, 7.3125, -1.046875, 6.671875, 6.671875, false)),
    glyph("\\precsim", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.515625, 6.25, 1.0625, 7.3125, -0.84375, 6.671875, 6.671875, false)),
    glyph("\\succsim", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.515625, 6.25, 1.0625, 7.3125, -0.84375, 6.671875, 6.671875, false)),
    glyph("\\nprec", true, "it", 10.0, "it", Metrics::new(8.37890625, 8.25, 6.25, 1.0625, 7.3125, -0.609375, 7.640625, 7.640625, false)),
    glyph("\\nsucc", true, "it", 10.0, "it", Metrics::new(8.37890625, 8.25, 6.25, 1.0625, 7.3125, -1.375, 6.875, 6.875, false)),
    glyph("\\nsubset", true, "it", 10.0, "it", Metrics::new(8.37890625, 8.234375, 6.390625, 1.0, 7.390625, -0.96875, 7.265625, 7.265625, false)),
    glyph("\\nsupset", true, "it", 10.0, "it", Metrics::new(8.37890625, 8.21875, 6.390625, 1.0, 7.390625, -1.0, 7.21875, 7.21875, false)),
    glyph("\\nsubseteq", true, "it", 10.0, "it", Metrics::new(8.37890625, 8.453125, 6.390625, 0.921875, 7.3125, -1.15625, 7.296875, 7.296875, false)),
    glyph("\\nsupseteq", true, "it", 10.0, "it", Metrics::new(8.37890625, 8.453125, 6.390625, 1.0625, 7.453125, -1.15625, 7.296875, 7.296875, false)),
    glyph("\\subsetneq", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.875, 6.390625, 0.921875, 7.3125, -0.734375, 6.140625, 6.140625, false)),
    glyph("\\supsetneq", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.875, 6.390625, 0.921875, 7.3125, -0.734375, 6.140625, 6.140625, false)),
    glyph("\\sqsubset", true, "it", 10.0, "it", Metrics::new(8.37890625, 5.671875, 6.25, 1.0625, 7.3125, 0.0, 5.671875, 5.671875, false)),
    glyph("\\sqsupset", true, "it", 10.0, "it", Metrics::new(8.37890625, 5.671875, 6.25, 1.0625, 7.3125, 0.0, 5.671875, 5.671875, false)),
    glyph("\\sqsubseteq", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.125, 6.25, 1.0625, 7.3125, -0.828125, 6.296875, 6.296875, false)),
    glyph("\\sqsupseteq", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.125, 6.25, 1.0625, 7.3125, -0.828125, 6.296875, 6.296875, false)),
    glyph("\\vDash", true, "it", 10.0, "it", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\Vdash", true, "it", 10.0, "it", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\Vvdash", true, "it", 10.0, "it", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\VDash", true, "it", 10.0, "it", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\nvdash", true, "it", 10.0, "it", Metrics::new(8.7109375, 7.78125, 7.0, 0.859375, 7.859375, -0.390625, 7.390625, 7.390625, false)),
    glyph("\\nvDash", true, "it", 10.0, "it", Metrics::new(8.7109375, 7.78125, 7.0, 0.859375, 7.859375, -0.390625, 7.390625, 7.390625, false)),
    glyph("\\nVdash", true, "it", 10.0, "it", Metrics::new(8.7109375, 7.78125, 7.0, 0.859375, 7.859375, -0.390625, 7.390625, 7.390625, false)),
    glyph("\\nVDash", true, "it", 10.0, "it", Metrics::new(8.7109375, 7.78125, 7.0, 0.859375, 7.859375, -0.390625, 7.390625, 7.390625, false)),
    glyph("\\vartriangleleft", true, "it", 10.0, "it", Metrics::new(8.37890625, 5.984375, 6.25, 1.0625, 7.3125, 0.140625, 6.125, 6.125, false)),
    glyph("\\vartriangleright", true, "it", 10.0, "it", Metrics::new(8.37890625, 5.984375, 6.25, 1.0625, 7.3125, 0.140625, 6.125, 6.125, false)),
    glyph("\\trianglelefteq", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.21875, 6.25, 1.0625, 7.3125, -0.484375, 6.734375, 6.734375, false)),
    glyph("\\trianglerighteq", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.21875, 6.25, 1.0625, 7.3125, -0.484375, 6.734375, 6.734375, false)),
    glyph("\\multimap", true, "it", 10.0, "it", Metrics::new(8.37890625, 2.796875, 7.421875, 0.484375, 7.90625, 1.75, 4.546875, 4.546875, false)),
    glyph("\\backsimeq", true, "it", 10.0, "it", Metrics::new(8.37890625, 3.21875, 6.25, 1.0625, 7.3125, 1.71875, 4.9375, 4.9375, false)),
    glyph("\\Subset", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.328125, 6.390625, 0.921875, 7.3125, -0.03125, 6.296875, 6.296875, false)),
    glyph("\\Supset", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.328125, 6.390625, 1.0625, 7.453125, -0.03125, 6.296875, 6.296875, false)),
    glyph("\\pitchfork", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.296875, 4.671875, 1.859375, 6.53125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\lessdot", true, "it", 10.0, "it", Metrics::new(8.37890625, 5.359375, 6.25, 1.0625, 7.3125, 0.453125, 5.8125, 5.8125, false)),
    glyph("\\gtrdot", true, "it", 10.0, "it", Metrics::new(8.37890625, 5.359375, 6.25, 1.0625, 7.3125, 0.453125, 5.8125, 5.8125, false)),
    glyph("\\lll", true, "it", 10.0, "it", Metrics::new(14.2236328125, 5.875, 12.78125, 0.71875, 13.5, 0.21875, 6.09375, 6.09375, false)),
    glyph("\\ggg", true, "it", 10.0, "it", Metrics::new(14.2236328125, 5.875, 12.78125, 0.71875, 13.5, 0.21875, 6.09375, 6.09375, false)),
    glyph("\\lesseqgtr", true, "it", 10.0, "it", Metrics::new(8.37890625, 10.8125, 6.25, 1.0625, 7.3125, -2.28125, 8.53125, 8.53125, false)),
    glyph("\\gtreqless", true, "it", 10.0, "it", Metrics::new(8.37890625, 10.8125, 6.25, 1.0625, 7.3125, -2.28125, 8.53125, 8.53125, false)),
    glyph("\\curlyeqprec", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.71875, 6.25, 1.0625, 7.3125, -1.046875, 6.671875, 6.671875, false)),
    glyph("\\curlyeqsucc", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.71875, 6.25, 1.0625, 7.3125, -1.046875, 6.671875, 6.671875, false)),
    glyph("\\npreccurlyeq", true, "it", 10.0, "it", Metrics::new(8.37890625, 9.421875, 6.25, 1.0625, 7.3125, -1.78125, 7.640625, 7.640625, false)),
    glyph("\\nsucccurlyeq", true, "it", 10.0, "it", Metrics::new(8.37890625, 9.421875, 6.25, 1.0625, 7.3125, -1.78125, 7.640625, 7.640625, false)),
    glyph("\\nsqsubseteq", true, "it", 10.0, "it", Metrics::new(8.37890625, 9.078125, 6.25, 1.0625, 7.3125, -1.40625, 7.671875, 7.671875, false)),
    glyph("\\nsqsupseteq", true, "it", 10.0, "it", Metrics::new(8.37890625, 9.078125, 6.25, 1.0625, 7.3125, -1.40625, 7.671875, 7.671875, false)),
    glyph("\\lnsim", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.203125, 6.265625, 1.0625, 7.328125, -1.375, 5.828125, 5.828125, false)),
    glyph("\\gnsim", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.203125, 6.265625, 1.0625, 7.328125, -1.375, 5.828125, 5.828125, false)),
    glyph("\\precnsim", true, "it", 10.0, "it", Metrics::new(8.37890625, 8.359375, 6.25, 1.0625, 7.3125, -1.6875, 6.671875, 6.671875, false)),
    glyph("\\succnsim", true, "it", 10.0, "it", Metrics::new(8.37890625, 8.375, 6.265625, 1.09375, 7.359375, -1.703125, 6.671875, 6.671875, false)),
    glyph("\\ntriangleleft", true, "it", 10.0, "it", Metrics::new(8.37890625, 8.859375, 6.25, 1.0625, 7.3125, -1.296875, 7.5625, 7.5625, false)),
    glyph("\\ntriangleright", true, "it", 10.0, "it", Metrics::new(8.37890625, 8.859375, 6.25, 1.0625, 7.3125, -1.296875, 7.5625, 7.5625, false)),
    glyph("\\ntrianglelefteq", true, "it", 10.0, "it", Metrics::new(8.37890625, 10.046875, 6.25, 1.0625, 7.3125, -1.890625, 8.15625, 8.15625, false)),
    glyph("\\ntrianglerighteq", true, "it", 10.0, "it", Metrics::new(8.37890625, 10.046875, 6.25, 1.046875, 7.296875, -1.890625, 8.15625, 8.15625, false)),
    glyph("\\leqslant", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.046875, 6.25, 1.0625, 7.3125, -1.234375, 5.8125, 5.8125, false)),
    glyph("\\geqslant", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.046875, 6.25, 1.0625, 7.3125, -1.234375, 5.8125, 5.8125, false)),
    glyph("\\lessapprox", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.953125, 6.265625, 1.0625, 7.328125, -1.328125, 6.625, 6.625, false)),
    glyph("\\gtrapprox", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.953125, 6.265625, 1.0625, 7.328125, -1.328125, 6.625, 6.625, false)),
    glyph("\\lneq", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.03125, 6.25, 1.0625, 7.3125, -1.203125, 5.828125, 5.828125, false)),
    glyph("\\gneq", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.03125, 6.25, 1.0625, 7.3125, -1.203125, 5.828125, 5.828125, false)),
    glyph("\\lnapprox", true, "it", 10.0, "it", Metrics::new(8.37890625, 8.65625, 6.265625, 1.0625, 7.328125, -2.03125, 6.625, 6.625, false)),
    glyph("\\gnapprox", true, "it", 10.0, "it", Metrics::new(8.37890625, 8.65625, 6.265625, 1.0625, 7.328125, -2.03125, 6.625, 6.625, false)),
    glyph("\\lesseqqgtr", true, "it", 10.0, "it", Metrics::new(8.37890625, 11.015625, 6.25, 1.0625, 7.3125, -3.109375, 7.90625, 7.90625, false)),
    glyph("\\gtreqqless", true, "it", 10.0, "it", Metrics::new(8.37890625, 11.015625, 6.25, 1.0625, 7.3125, -3.109375, 7.90625, 7.90625, false)),
    glyph("\\eqslantless", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.046875, 6.25, 1.0625, 7.3125, -0.609375, 6.4375, 6.4375, false)),
    glyph("\\eqslantgtr", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.046875, 6.25, 1.0625, 7.3125, -0.609375, 6.4375, 6.4375, false)),
    glyph("\\preceq", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.90625, 6.25, 1.0625, 7.3125, -0.234375, 6.671875, 6.671875, false)),
    glyph("\\succeq", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.90625, 6.25, 1.0625, 7.3125, -0.234375, 6.671875, 6.671875, false)),
    glyph("\\precneqq", true, "it", 10.0, "it", Metrics::new(8.37890625, 8.5625, 6.25, 1.0625, 7.3125, -1.953125, 6.609375, 6.609375, false)),
    glyph("\\succneqq", true, "it", 10.0, "it", Metrics::new(8.37890625, 8.5625, 6.25, 1.0625, 7.3125, -1.953125, 6.609375, 6.609375, false)),
    glyph("\\precapprox", true, "it", 10.0, "it", Metrics::new(8.37890625, 8.828125, 6.25, 1.0625, 7.3125, -1.90625, 6.921875, 6.921875, false)),
    glyph("\\succapprox", true, "it", 10.0, "it", Metrics::new(8.37890625, 8.828125, 6.25, 1.0625, 7.3125, -1.90625, 6.921875, 6.921875, false)),
    glyph("\\precnapprox", true, "it", 10.0, "it", Metrics::new(8.37890625, 9.515625, 6.265625, 1.0625, 7.328125, -2.59375, 6.921875, 6.921875, false)),
    glyph("\\succnapprox", true, "it", 10.0, "it", Metrics::new(8.37890625, 9.515625, 6.265625, 1.0625, 7.328125, -2.59375, 6.921875, 6.921875, false)),
    glyph("\\dotplus", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.296875, 6.25, 1.0625, 7.3125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\smallsetminus", true, "it", 10.0, "it", Metrics::new(6.3671875, 8.21875, 3.375, 1.921875, 5.296875, -0.53125, 7.6875, 7.6875, false)),
    glyph("\\dotminus", true, "it", 10.0, "it", Metrics::new(8.37890625, 2.796875, 6.25, 1.0625, 7.3125, 2.71875, 5.515625, 5.515625, false)),
    glyph("\\cupdot", true, "it", 10.0, "it", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\circledcirc", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\circledast", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\circleddash", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\boxplus", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\boxminus", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\boxtimes", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\boxdot", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\intercal", true, "it", 10.0, "it", Metrics::new(5.205078125, 7.0, 2.890625, 1.15625, 4.046875, 0.0, 7.0, 7.0, false)),
    glyph("\\veebar", true, "it", 10.0, "it", Metrics::new(7.3193359375, 7.40625, 5.359375, 0.984375, 6.34375, 0.0, 7.40625, 7.40625, false)),
    glyph("\\barwedge", true, "it", 10.0, "it", Metrics::new(7.3193359375, 7.40625, 5.359375, 0.984375, 6.34375, 0.0, 7.40625, 7.40625, false)),
    glyph("\\barvee", true, "it", 10.0, "it", Metrics::new(7.3193359375, 7.40625, 5.359375, 0.984375, 6.34375, 0.0, 7.40625, 7.40625, false)),
    glyph("\\divideontimes", true, "it", 10.0, "it", Metrics::new(8.37890625, 5.984375, 6.25, 1.0625, 7.3125, 0.140625, 6.125, 6.125, false)),
    glyph("\\ltimes", true, "it", 10.0, "it", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\rtimes", true, "it", 10.0, "it", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\leftthreetimes", true, "it", 10.0, "it", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\rightthreetimes", true, "it", 10.0, "it", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\curlyvee", true, "it", 10.0, "it", Metrics::new(7.32421875, 5.796875, 6.359375, 0.484375, 6.84375, 0.0, 5.796875, 5.796875, false)),
    glyph("\\curlywedge", true, "it", 10.0, "it", Metrics::new(7.32421875, 5.796875, 6.359375, 0.484375, 6.84375, 0.0, 5.796875, 5.796875, false)),
    glyph("\\Cap", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.625, 6.328125, 1.03125, 7.359375, 0.0, 6.625, 6.625, false)),
    glyph("\\Cup", true, "it", 10.0, "it", Metrics::new(8.37890625, 6.625, 6.328125, 1.03125, 7.359375, -0.140625, 6.484375, 6.484375, false)),
    glyph("\\doublebarwedge", true, "it", 10.0, "it", Metrics::new(8.37890625, 5.125, 4.28125, 2.046875, 6.328125, 0.0, 5.125, 5.125, false)),
    glyph("\\bigodot", true, "it", 10.0, "it", Metrics::new(10.0, 9.453125, 9.4375, 0.28125, 9.71875, -1.984375, 7.46875, 7.46875, false)),
    glyph("\\oiint", true, "it", 10.0, "it", Metrics::new(7.890625, 9.6875, 6.734375, 0.578125, 7.3125, -2.125, 7.5625, 7.5625, false)),
    glyph("\\oiiint", true, "it", 10.0, "it", Metrics::new(10.5712890625, 9.6875, 9.421875, 0.578125, 10.0, -2.125, 7.5625, 7.5625, false)),
    glyph("\\iiiint", true, "it", 10.0, "it", Metrics::new(13.251953125, 9.6875, 12.109375, 0.578125, 12.6875, -2.125, 7.5625, 7.5625, false)),
    glyph("\\minus", true, "it", 10.0, "it", Metrics::new(8.37890625, 0.828125, 6.25, 1.0625, 7.3125, 2.71875, 3.546875, 3.546875, false)),
    glyph("\\cdotp", true, "it", 10.0, "it", Metrics::new(3.1787109375, 1.234375, 1.03125, 1.0625, 2.09375, 2.859375, 4.09375, 4.09375, false)),
    glyph("\\hslash", true, "it", 10.0, "it", Metrics::new(6.337890625, 7.59375, 5.4375, 0.4375, 5.875, 0.0, 7.59375, 7.59375, true)),
    glyph("\\beth", true, "it", 10.0, "it", Metrics::new(6.73828125, 7.5625, 6.5625, -0.03125, 6.53125, -0.140625, 7.421875, 7.421875, true)),
    glyph("\\gimel", true, "it", 10.0, "it", Metrics::new(4.658203125, 7.765625, 3.9375, 0.125, 4.0625, -0.34375, 7.421875, 7.421875, true)),
    glyph("\\daleth", true, "it", 10.0, "it", Metrics::new(6.4453125, 7.765625, 5.484375, 0.421875, 5.90625, -0.34375, 7.421875, 7.421875, true)),
    glyph("\\mho", true, "it", 10.0, "it", Metrics::new(7.6416015625, 7.375, 6.890625, 0.375, 7.265625, -0.140625, 7.234375, 7.234375, false)),
    glyph("\\eth", true, "it", 10.0, "it", Metrics::new(6.1181640625, 7.734375, 5.421875, 0.453125, 5.875, -0.140625, 7.59375, 7.59375, true)),
    glyph("\\Finv", true, "it", 10.0, "it", Metrics::new(5.751953125, 7.296875, 5.609375, 0.265625, 5.875, 0.0, 7.296875, 7.296875, true)),
    glyph("\\Game", true, "it", 10.0, "it", Metrics::new(7.7490234375, 7.5625, 6.359375, 0.796875, 7.15625, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\digamma", true, "it", 10.0, "it", Metrics::new(4.5849609375, 9.671875, 6.828125, -1.828125, 5.0, -2.078125, 7.59375, 7.59375, true)),
    glyph("\\varkappa", true, "it", 10.0, "it", Metrics::new(6.6357421875, 6.109375, 6.609375, -0.03125, 6.578125, -0.34375, 5.765625, 5.765625, true)),
    glyph("\\backepsilon", true, "it", 10.0, "it", Metrics::new(6.15234375, 5.734375, 4.25, 0.953125, 5.203125, -0.140625, 5.59375, 5.59375, false)),
    glyph("\\AA", true, "it", 10.0, "it", Metrics::new(6.8408203125, 9.28125, 6.6875, -0.53125, 6.15625, 0.0, 9.28125, 9.28125, true)),
    glyph("\\ae", true, "it", 10.0, "it", Metrics::new(9.951171875, 5.734375, 9.109375, 0.40625, 9.515625, -0.140625, 5.59375, 5.59375, true)),
    glyph("\\AE", true, "it", 10.0, "it", Metrics::new(9.7412109375, 7.296875, 10.390625, -0.453125, 9.9375, 0.0, 7.296875, 7.296875, true)),
    glyph("\\oe", true, "it", 10.0, "it", Metrics::new(10.2783203125, 5.734375, 9.390625, 0.453125, 9.84375, -0.140625, 5.59375, 5.59375, true)),
    glyph("\\OE", true, "it", 10.0, "it", Metrics::new(10.6982421875, 7.296875, 10.21875, 0.453125, 10.671875, 0.0, 7.296875, 7.296875, true)),
    glyph("\\o", true, "it", 10.0, "it", Metrics::new(6.1181640625, 6.359375, 6.359375, -0.140625, 6.21875, -0.453125, 5.90625, 5.90625, true)),
    glyph("\\O", true, "it", 10.0, "it", Metrics::new(7.87109375, 7.9375, 8.4375, -0.34375, 8.09375, -0.328125, 7.609375, 7.609375, true)),
    glyph("\\ss", true, "it", 10.0, "it", Metrics::new(6.298828125, 7.734375, 5.4375, 0.46875, 5.90625, -0.140625, 7.59375, 7.59375, true)),
    glyph("\\l", true, "it", 10.0, "it", Metrics::new(2.87109375, 7.59375, 3.0, 0.171875, 3.171875, 0.0, 7.59375, 7.59375, true)),
    glyph("\\L", true, "it", 10.0, "it", Metrics::new(5.6201171875, 7.296875, 5.21875, -0.203125, 5.015625, 0.0, 7.296875, 7.296875, true)),
    glyph("\\complement", true, "it", 10.0, "it", Metrics::new(6.3623046875, 7.5625, 4.875, 0.65625, 5.53125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\nexists", true, "it", 10.0, "it", Metrics::new(6.318359375, 8.21875, 4.6875, 0.984375, 5.671875, -0.453125, 7.765625, 7.765625, false)),
    glyph("\\varnothing", true, "it", 10.0, "it", Metrics::new(8.7109375, 7.1875, 7.203125, 0.75, 7.953125, -0.09375, 7.09375, 7.09375, false)),
    glyph("\\smallin", true, "it", 10.0, "it", Metrics::new(7.177734375, 4.75, 5.0625, 1.0625, 6.125, 0.75, 5.5, 5.5, false)),
    glyph("\\QED", true, "it", 10.0, "it", Metrics::new(6.3623046875, 4.859375, 3.421875, 1.46875, 4.890625, 0.0, 4.859375, 4.859375, false)),
    glyph("\\measuredangle", true, "it", 10.0, "it", Metrics::new(8.96484375, 7.828125, 7.0, 0.859375, 7.859375, -0.53125, 7.296875, 7.296875, false)),
    glyph("\\sphericalangle", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.296875, 6.171875, 1.15625, 7.328125, -0.03125, 7.265625, 7.265625, false)),
    glyph("\\rightangle", true, "it", 10.0, "it", Metrics::new(8.37890625, 5.625, 5.625, 1.375, 7.0, 0.984375, 6.609375, 6.609375, false)),
    glyph("\\therefore", true, "it", 10.0, "it", Metrics::new(6.3623046875, 5.046875, 5.171875, 0.59375, 5.765625, 1.0, 6.046875, 6.046875, false)),
    glyph("\\because", true, "it", 10.0, "it", Metrics::new(6.3623046875, 5.046875, 5.171875, 0.59375, 5.765625, 1.0, 6.046875, 6.046875, false)),
    glyph("\\Colon", true, "it", 10.0, "it", Metrics::new(6.3623046875, 5.046875, 5.171875, 0.59375, 5.765625, 1.0, 6.046875, 6.046875, false)),
    glyph("\\lnot", true, "it", 10.0, "it", Metrics::new(8.37890625, 2.796875, 6.25, 1.0625, 7.3125, 1.40625, 4.203125, 4.203125, false)),
    glyph("\\sqrt", true, "it", 10.0, "it", Metrics::new(6.3720703125, 8.3125, 6.078125, 0.296875, 6.375, -0.203125, 8.109375, 8.109375, false)),
    glyph("\\dots", true, "it", 10.0, "it", Metrics::new(10.0, 1.234375, 7.6875, 1.15625, 8.84375, 0.0, 1.234375, 1.234375, false)),
    glyph("\\adots", true, "it", 10.0, "it", Metrics::new(10.0, 8.078125, 7.6875, 1.15625, 8.84375, -0.921875, 7.15625, 7.15625, false)),
    glyph("\\ulcorner", true, "it", 10.0, "it", Metrics::new(4.6875, 3.34375, 3.171875, 0.859375, 4.03125, 4.25, 7.59375, 7.59375, false)),
    glyph("\\urcorner", true, "it", 10.0, "it", Metrics::new(4.6875, 3.34375, 3.171875, 0.65625, 3.828125, 4.25, 7.59375, 7.59375, false)),
    glyph("\\llcorner", true, "it", 10.0, "it", Metrics::new(4.6875, 3.34375, 3.171875, 0.859375, 4.03125, -0.703125, 2.640625, 2.640625, false)),
    glyph("\\lrcorner", true, "it", 10.0, "it", Metrics::new(4.6875, 3.34375, 3.171875, 0.65625, 3.828125, -0.703125, 2.640625, 2.640625, false)),
    glyph("\\lbrack", true, "it", 10.0, "it", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.859375, 2.9375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rbrack", true, "it", 10.0, "it", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.96875, 3.046875, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\leftparen", true, "it", 10.0, "it", Metrics::new(3.9013671875, 8.90625, 2.234375, 0.859375, 3.09375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rightparen", true, "it", 10.0, "it", Metrics::new(3.9013671875, 8.90625, 2.25, 0.796875, 3.046875, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\bigtriangleup", true, "it", 10.0, "it", Metrics::new(7.6904296875, 7.65625, 7.625, 0.03125, 7.65625, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\vartriangle", true, "it", 10.0, "it", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\blacktriangle", true, "it", 10.0, "it", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\triangleright", true, "it", 10.0, "it", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\blacktriangleright", true, "it", 10.0, "it", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\bigtriangledown", true, "it", 10.0, "it", Metrics::new(7.6904296875, 7.65625, 7.625, 0.03125, 7.65625, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\triangledown", true, "it", 10.0, "it", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\blacktriangledown", true, "it", 10.0, "it", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\triangleleft", true, "it", 10.0, "it", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\blacktriangleleft", true, "it", 10.0, "it", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\lozenge", true, "it", 10.0, "it", Metrics::new(4.94140625, 10.40625, 4.875, 0.03125, 4.90625, -2.328125, 8.078125, 8.078125, false)),
    glyph("\\blacksquare", true, "it", 10.0, "it", Metrics::new(9.4482421875, 7.65625, 7.640625, 0.90625, 8.546875, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\square", true, "it", 10.0, "it", Metrics::new(9.4482421875, 7.65625, 7.640625, 0.90625, 8.546875, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\Box", true, "it", 10.0, "it", Metrics::new(9.4482421875, 7.65625, 7.640625, 0.90625, 8.546875, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\bigstar", true, "it", 10.0, "it", Metrics::new(8.96484375, 7.28125, 7.65625, 0.65625, 8.3125, -0.046875, 7.234375, 7.234375, false)),
    glyph("\\diagup", true, "it", 10.0, "it", Metrics::new(6.0205078125, 11.6875, 6.890625, -0.4375, 6.453125, -2.40625, 9.28125, 9.28125, false)),
    glyph("\\diagdown", true, "it", 10.0, "it", Metrics::new(6.0205078125, 11.6875, 6.890625, -0.4375, 6.453125, -2.40625, 9.28125, 9.28125, false)),
    glyph("\\varspadesuit", true, "it", 10.0, "it", Metrics::new(8.96484375, 7.296875, 5.8125, 1.578125, 7.390625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\varheartsuit", true, "it", 10.0, "it", Metrics::new(8.96484375, 7.28125, 7.1875, 0.890625, 8.078125, 0.0, 7.28125, 7.28125, false)),
    glyph("\\vardiamondsuit", true, "it", 10.0, "it", Metrics::new(8.96484375, 7.28125, 5.59375, 1.6875, 7.28125, 0.0, 7.28125, 7.28125, false)),
    glyph("\\varclubsuit", true, "it", 10.0, "it", Metrics::new(8.96484375, 7.328125, 6.75, 1.109375, 7.859375, 0.0, 7.328125, 7.328125, false)),
    glyph("\\checkmark", true, "it", 10.0, "it", Metrics::new(8.37890625, 5.328125, 5.171875, 1.5, 6.671875, 0.96875, 6.296875, 6.296875, false)),
    glyph("\\maltese", true, "it", 10.0, "it", Metrics::new(8.37890625, 7.296875, 7.28125, 0.546875, 7.828125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\sun", true, "it", 10.0, "it", Metrics::new(8.96484375, 7.3125, 7.3125, 0.828125, 8.140625, 0.0, 7.3125, 7.3125, false)),
    glyph("\\mercury", true, "it", 10.0, "it", Metrics::new(6.1376953125, 8.328125, 4.421875, 0.859375, 5.28125, -1.015625, 7.3125, 7.3125, false)),
    glyph("\\venus", true, "it", 10.0, "it", Metrics::new(7.32421875, 8.5625, 5.609375, 0.859375, 6.46875, -1.25, 7.3125, 7.3125, false)),
    glyph("\\earth", true, "it", 10.0, "it", Metrics::new(7.32421875, 8.5625, 5.609375, 0.859375, 6.46875, -0.140625, 8.421875, 8.421875, false)),
    glyph("\\mars", true, "it", 10.0, "it", Metrics::new(8.96484375, 7.34375, 7.515625, 0.796875, 8.3125, -0.140625, 7.203125, 7.203125, false)),
    glyph("\\jupiter", true, "it", 10.0, "it", Metrics::new(8.96484375, 7.3125, 5.640625, 1.65625, 7.296875, 0.0, 7.3125, 7.3125, false)),
    glyph("\\saturn", true, "it", 10.0, "it", Metrics::new(8.96484375, 7.3125, 4.578125, 2.1875, 6.765625, 0.0, 7.3125, 7.3125, false)),
    glyph("\\uranus", true, "it", 10.0, "it", Metrics::new(8.96484375, 7.3125, 6.53125, 1.21875, 7.75, 0.0, 7.3125, 7.3125, false)),
    glyph("\\neptune", true, "it", 10.0, "it", Metrics::new(8.96484375, 7.3125, 6.421875, 1.265625, 7.6875, 0.0, 7.3125, 7.3125, false)),
    glyph("\\pluto", true, "it", 10.0, "it", Metrics::new(8.96484375, 7.3125, 4.15625, 2.40625, 6.5625, 0.0, 7.3125, 7.3125, false)),
    glyph("\\male", true, "it", 10.0, "it", Metrics::new(8.96484375, 7.34375, 7.515625, 0.796875, 8.3125, -0.140625, 7.203125, 7.203125, false)),
    glyph("\\female", true, "it", 10.0, "it", Metrics::new(7.32421875, 8.5625, 5.609375, 0.859375, 6.46875, -1.25, 7.3125, 7.3125, false)),
    glyph("\\circledR", true, "it", 10.0, "it", Metrics::new(10.0, 7.25, 7.25, 1.375, 8.625, 0.0, 7.25, 7.25, false)),
    glyph("\\yen", true, "it", 10.0, "it", Metrics::new(6.3623046875, 7.296875, 5.546875, 0.40625, 5.953125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\sterling", true, "it", 10.0, "it", Metrics::new(6.3623046875, 7.421875, 4.859375, 0.625, 5.484375, 0.0, 7.421875, 7.421875, false)),
    glyph("\\cent", true, "it", 10.0, "it", Metrics::new(6.3623046875, 8.53125, 4.328125, 0.84375, 5.171875, -1.53125, 7.0, 7.0, false)),
    glyph("\\backprime", true, "it", 10.0, "it", Metrics::new(2.2705078125, 1.828125, 1.828125, 0.203125, 2.03125, 5.46875, 7.296875, 7.296875, false)),
    glyph("\\dag", true, "it", 10.0, "it", Metrics::new(5.0, 8.265625, 4.4375, 0.28125, 4.71875, -0.96875, 7.296875, 7.296875, false)),
    glyph("\\ddag", true, "it", 10.0, "it", Metrics::new(5.0, 8.265625, 4.4375, 0.28125, 4.71875, -0.96875, 7.296875, 7.296875, false)),
    glyph("é", true, "it", 10.0, "it", Metrics::new(6.15234375, 8.140625, 5.3125, 0.453125, 5.765625, -0.140625, 8.0, 8.0, true)),
    glyph(" ", true, "it", 10.0, "it", Metrics::new(3.1787109375, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, false)),
    glyph("a", true, "it", 12.0, "it", Metrics::new(7.353515625, 6.890625, 6.0625, 0.5, 6.5625, -0.171875, 6.71875, 6.71875, true)),
    glyph("b", true, "it", 12.0, "it", Metrics::new(7.6171875, 9.296875, 6.609375, 0.4375, 7.046875, -0.171875, 9.125, 9.125, true)),
    glyph("c", true, "it", 12.0, "it", Metrics::new(6.59765625, 6.890625, 5.890625, 0.546875, 6.4375, -0.171875, 6.71875, 6.71875, true)),
    glyph("d", true, "it", 12.0, "it", Metrics::new(7.6171875, 9.296875, 7.125, 0.546875, 7.671875, -0.171875, 9.125, 9.125, true)),
    glyph("e", true, "it", 12.0, "it", Metrics::new(7.3828125, 6.890625, 6.296875, 0.546875, 6.84375, -0.171875, 6.71875, 6.71875, true)),
    glyph("f", true, "it", 12.0, "it", Metrics::new(4.224609375, 9.125, 4.921875, 0.8125, 5.734375, 0.0, 9.125, 9.125, true)),
    glyph("g", true, "it", 12.0, "it", Metrics::new(7.6171875, 9.21875, 6.765625, 0.390625, 7.15625, -2.5, 6.71875, 6.71875, true)),
    glyph("h", true, "it", 12.0, "it", Metrics::new(7.60546875, 9.125, 6.375, 0.421875, 6.796875, 0.0, 9.125, 9.125, true)),
    glyph("i", true, "it", 12.0, "it", Metrics::new(3.333984375, 9.125, 2.859375, 0.421875, 3.28125, 0.0, 9.125, 9.125, true)),
    glyph("j", true, "it", 12.0, "it", Metrics::new(3.333984375, 11.625, 4.6875, -1.359375, 3.328125, -2.5, 9.125, 9.125, true)),
    glyph("k", true, "it", 12.0, "it", Metrics::new(6.94921875, 9.125, 6.921875, 0.421875, 7.34375, 0.0, 9.125, 9.125, true)),
    glyph("l", true, "it", 12.0, "it", Metrics::new(3.333984375, 9.125, 2.859375, 0.421875, 3.28125, 0.0, 9.125, 9.125, true)),
    glyph("m", true, "it", 12.0, "it", Metrics::new(11.689453125, 6.71875, 10.453125, 0.421875, 10.875, 0.0, 6.71875, 6.71875, true)),
    glyph("n", true, "it", 12.0, "it", Metrics::new(7.60546875, 6.71875, 6.375, 0.421875, 6.796875, 0.0, 6.71875, 6.71875, true)),
    glyph("o", true, "it", 12.0, "it", Metrics::new(7.341796875, 6.890625, 6.25, 0.546875, 6.796875, -0.171875, 6.71875, 6.71875, true)),
    glyph("p", true, "it", 12.0, "it", Metrics::new(7.6171875, 9.21875, 7.09375, -0.03125, 7.0625, -2.5, 6.71875, 6.71875, true)),
    glyph("q", true, "it", 12.0, "it", Metrics::new(7.6171875, 9.1875, 6.625, 0.546875, 7.171875, -2.46875, 6.71875, 6.71875, true)),
    glyph("r", true, "it", 12.0, "it", Metrics::new(4.93359375, 6.71875, 5.140625, 0.421875, 5.5625, 0.0, 6.71875, 6.71875, true)),
    glyph("s", true, "it", 12.0, "it", Metrics::new(6.251953125, 6.890625, 5.859375, 0.140625, 6.0, -0.171875, 6.71875, 6.71875, true)),
    glyph("t", true, "it", 12.0, "it", Metrics::new(4.705078125, 8.421875, 4.3125, 0.765625, 5.078125, 0.0, 8.421875, 8.421875, true)),
    glyph("u", true, "it", 12.0, "it", Metrics::new(7.60546875, 6.734375, 6.375, 0.6875, 7.0625, -0.171875, 6.5625, 6.5625, true)),
    glyph("v", true, "it", 12.0, "it", Metrics::new(7.1015625, 6.5625, 6.390625, 0.859375, 7.25, 0.0, 6.5625, 6.5625, true)),
    glyph("w", true, "it", 12.0, "it", Metrics::new(9.814453125, 6.5625, 8.8125, 1.015625, 9.828125, 0.0, 6.5625, 6.5625, true)),
    glyph("x", true, "it", 12.0, "it", Metrics::new(7.1015625, 6.5625, 7.515625, -0.3125, 7.203125, 0.0, 6.5625, 6.5625, true)),
    glyph("y", true, "it", 12.0, "it", Metrics::new(7.1015625, 9.0625, 7.53125, -0.296875, 7.234375, -2.5, 6.5625, 6.5625, true)),
    glyph("z", true, "it", 12.0, "it", Metrics::new(6.298828125, 6.5625, 6.546875, -0.03125, 6.515625, 0.0, 6.5625, 6.5625, true)),
    glyph("A", true, "it", 12.0, "it", Metrics::new(8.208984375, 8.75, 8.03125, -0.640625, 7.390625, 0.0, 8.75, 8.75, true)),
    glyph("B", true, "it", 12.0, "it", Metrics::new(8.232421875, 8.75, 7.171875, 0.328125, 7.5, 0.0, 8.75, 8.75, true)),
    glyph("C", true, "it", 12.0, "it", Metrics::new(8.37890625, 9.078125, 7.84375, 0.5, 8.34375, -0.171875, 8.90625, 8.90625, true)),
    glyph("D", true, "it", 12.0, "it", Metrics::new(9.240234375, 8.75, 8.34375, 0.328125, 8.671875, 0.0, 8.75, 8.75, true)),
    glyph("E", true, "it", 12.0, "it", Metrics::new(7.58203125, 8.75, 7.234375, 0.328125, 7.5625, 0.0, 8.75, 8.75, true)),
    glyph("F", true, "it", 12.0, "it", Metrics::new(6.90234375, 8.75, 6.71875, 0.328125, 7.046875, 0.0, 8.75, 8.75, true)),
    glyph("G", true, "it", 12.0, "it", Metrics::new(9.298828125, 9.078125, 8.15625, 0.546875, 8.703125, -0.171875, 8.90625, 8.90625, true)),
    glyph("H", true, "it", 12.0, "it", Metrics::new(9.0234375, 8.75, 8.375, 0.328125, 8.703125, 0.0, 8.75, 8.75, true)),
    glyph("I", true, "it", 12.0, "it", Metrics::new(3.5390625, 8.75, 2.890625, 0.328125, 3.21875, 0.0, 8.75, 8.75, true)),
    glyph("J", true, "it", 12.0, "it", Metrics::new(3.5390625, 11.15625, 5.15625, -1.96875, 3.1875, -2.40625, 8.75, 8.75, true)),
    glyph("K", true, "it", 12.0, "it", Metrics::new(7.869140625, 8.75, 8.34375, 0.328125, 8.671875, 0.0, 8.75, 8.75, true)),
    glyph("L", true, "it", 12.0, "it", Metrics::new(6.685546875, 8.75, 5.640625, 0.328125, 5.96875, 0.0, 8.75, 8.75, true)),
    glyph("M", true, "it", 12.0, "it", Metrics::new(10.353515625, 8.75, 9.703125, 0.328125, 10.03125, 0.0, 8.75, 8.75, true)),
    glyph("N", true, "it", 12.0, "it", Metrics::new(8.9765625, 8.75, 8.328125, 0.328125, 8.65625, 0.0, 8.75, 8.75, true)),
    glyph("O", true, "it", 12.0, "it", Metrics::new(9.4453125, 9.078125, 8.484375, 0.484375, 8.96875, -0.171875, 8.90625, 8.90625, true)),
    glyph("P", true, "it", 12.0, "it", Metrics::new(7.236328125, 8.75, 6.890625, 0.328125, 7.21875, 0.0, 8.75, 8.75, true)),
    glyph("Q", true, "it", 12.0, "it", Metrics::new(9.4453125, 10.453125, 8.46875, 0.5, 8.96875, -1.546875, 8.90625, 8.90625, true)),
    glyph("R", true, "it", 12.0, "it", Metrics::new(8.337890625, 8.75, 6.875, 0.328125, 7.203125, 0.0, 8.75, 8.75, true)),
    glyph("S", true, "it", 12.0, "it", Metrics::new(7.6171875, 9.078125, 7.15625, 0.078125, 7.234375, -0.171875, 8.90625, 8.90625, true)),
    glyph("T", true, "it", 12.0, "it", Metrics::new(7.330078125, 8.75, 7.59375, 0.515625, 8.109375, 0.0, 8.75, 8.75, true)),
    glyph("U", true, "it", 12.0, "it", Metrics::new(8.783203125, 8.921875, 7.859375, 0.703125, 8.5625, -0.171875, 8.75, 8.75, true)),
    glyph("V", true, "it", 12.0, "it", Metrics::new(8.208984375, 8.75, 7.96875, 0.9375, 8.90625, 0.0, 8.75, 8.75, true)),
    glyph("W", true, "it", 12.0, "it", Metrics::new(11.865234375, 8.75, 11.078125, 1.15625, 12.234375, 0.0, 8.75, 8.75, true)),
    glyph("X", true, "it", 12.0, "it", Metrics::new(8.220703125, 8.75, 8.953125, -0.515625, 8.4375, 0.0, 8.75, 8.75, true)),
    glyph("Y", true, "it", 12.0, "it", Metrics::new(7.330078125, 8.75, 7.359375, 0.75, 8.109375, 0.0, 8.75, 8.75, true)),
    glyph("Z", true, "it", 12.0, "it", Metrics::new(8.220703125, 8.75, 8.703125, -0.265625, 8.4375, 0.0, 8.75, 8.75, true)),
    glyph("\\alpha", true, "it", 12.0, "it", Metrics::new(7.91015625, 6.890625, 7.390625, 0.34375, 7.734375, -0.15625, 6.734375, 6.734375, true)),
    glyph("\\beta", true, "it", 12.0, "it", Metrics::new(7.658203125, 11.6875, 7.3125, -0.015625, 7.296875, -2.5, 9.1875, 9.1875, true)),
    glyph("\\gamma", true, "it", 12.0, "it", Metrics::new(7.1015625, 9.0625, 6.734375, 0.890625, 7.625, -2.5, 6.5625, 6.5625, true)),
    glyph("\\delta", true, "it", 12.0, "it", Metrics::new(7.341796875, 9.078125, 6.640625, 0.140625, 6.78125, -0.171875, 8.90625, 8.90625, true)),
    glyph("\\epsilon", true, "it", 12.0, "it", Metrics::new(7.3828125, 6.890625, 6.046875, 0.34375, 6.390625, -0.171875, 6.71875, 6.71875, true)),
    glyph("\\varepsilon", true, "it", 12.0, "it", Metrics::new(6.486328125, 6.90625, 5.59375, 0.46875, 6.0625, -0.171875, 6.734375, 6.734375, true)),
    glyph("\\zeta", true, "it", 12.0, "it", Metrics::new(6.52734375, 11.640625, 7.125, -0.046875, 7.078125, -2.515625, 9.125, 9.125, true)),
    glyph("\\eta", true, "it", 12.0, "it", Metrics::new(7.60546875, 9.21875, 6.515625, 0.6875, 7.203125, -2.5, 6.71875, 6.71875, true)),
    glyph("\\theta", true, "it", 12.0, "it", Metrics::new(7.341796875, 9.359375, 6.875, 0.234375, 7.109375, -0.140625, 9.21875, 9.21875, true)),
    glyph("\\vartheta", true, "it", 12.0, "it", Metrics::new(7.4296875, 9.359375, 6.984375, 0.1875, 7.171875, -0.140625, 9.21875, 9.21875, true)),
    glyph("\\iota", true, "it", 12.0, "it", Metrics::new(4.060546875, 6.5625, 2.625, 0.5625, 3.1875, 0.0, 6.5625, 6.5625, true)),
    glyph("\\kappa", true, "it", 12.0, "it", Metrics::new(7.072265625, 6.5625, 6.53125, 0.484375, 7.015625, 0.0, 6.5625, 6.5625, true)),
    glyph("\\lambda", true, "it", 12.0, "it", Metrics::new(7.1015625, 9.125, 6.390625, -0.53125, 5.859375, 0.0, 9.125, 9.125, true)),
    glyph("\\mu", true, "it", 12.0, "it", Metrics::new(7.634765625, 9.0625, 7.265625, -0.15625, 7.109375, -2.5, 6.5625, 6.5625, true)),
    glyph("\\nu", true, "it", 12.0, "it", Metrics::new(6.703125, 6.5625, 5.328125, 1.078125, 6.40625, 0.0, 6.5625, 6.5625, true)),
    glyph("\\xi", true, "it", 12.0, "it", Metrics::new(6.69140625, 11.640625, 6.8125, -0.046875, 6.765625, -2.515625, 9.125, 9.125, true)),
    glyph("\\pi", true, "it", 12.0, "it", Metrics::new(7.224609375, 6.796875, 6.734375, 0.65625, 7.390625, -0.234375, 6.5625, 6.5625, true)),
    glyph("\\varpi", true, "it", 12.0, "it", Metrics::new(10.048828125, 6.734375, 10.15625, 0.140625, 10.296875, -0.171875, 6.5625, 6.5625, true)),
    glyph("\\rho", true, "it", 12.0, "it", Metrics::new(7.6171875, 9.21875, 7.296875, 0.1875, 7.484375, -2.5, 6.71875, 6.71875, true)),
    glyph("\\varrho", true, "it", 12.0, "it", Metrics::new(7.6171875, 9.21875, 7.34375, 0.140625, 7.484375, -2.5, 6.71875, 6.71875, true)),
    glyph("\\sigma", true, "it", 12.0, "it", Metrics::new(7.60546875, 6.734375, 7.546875, 0.359375, 7.90625, -0.171875, 6.5625, 6.5625, true)),
    glyph("\\varsigma", true, "it", 12.0, "it", Metrics::new(7.04296875, 9.234375, 6.09375, 0.578125, 6.671875, -2.515625, 6.71875, 6.71875, true)),
    glyph("\\tau", true, "it", 12.0, "it", Metrics::new(7.224609375, 6.5625, 6.265625, 1.015625, 7.28125, 0.0, 6.5625, 6.5625, true)),
    glyph("\\upsilon", true, "it", 12.0, "it", Metrics::new(6.943359375, 6.5625, 6.03125, 0.484375, 6.515625, 0.0, 6.5625, 6.5625, true)),
    glyph("\\phi", true, "it", 12.0, "it", Metrics::new(7.916015625, 11.625, 7.203125, 0.328125, 7.53125, -2.5, 9.125, 9.125, true)),
    glyph("\\varphi", true, "it", 12.0, "it", Metrics::new(7.916015625, 9.109375, 7.203125, 0.578125, 7.78125, -2.5, 6.609375, 6.609375, true)),
    glyph("\\chi", true, "it", 12.0, "it", Metrics::new(7.1015625, 9.0625, 8.0, -0.53125, 7.46875, -2.5, 6.5625, 6.5625, true)),
    glyph("\\psi", true, "it", 12.0, "it", Metrics::new(7.916015625, 9.0625, 7.59375, 0.515625, 8.109375, -2.5, 6.5625, 6.5625, true)),
    glyph("\\omega", true, "it", 12.0, "it", Metrics::new(10.048828125, 6.734375, 9.375, 0.140625, 9.515625, -0.171875, 6.5625, 6.5625, true)),
    glyph("\\Gamma", true, "it", 12.0, "it", Metrics::new(6.685546875, 8.75, 5.453125, 1.171875, 6.625, 0.0, 8.75, 8.75, false)),
    glyph("\\Delta", true, "it", 12.0, "it", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("\\Theta", true, "it", 12.0, "it", Metrics::new(9.4453125, 9.078125, 8.09375, 0.671875, 8.765625, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\Lambda", true, "it", 12.0, "it", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("\\Xi", true, "it", 12.0, "it", Metrics::new(7.58203125, 8.75, 5.40625, 1.171875, 6.578125, 0.0, 8.75, 8.75, false)),
    glyph("\\Pi", true, "it", 12.0, "it", Metrics::new(9.0234375, 8.75, 6.671875, 1.171875, 7.84375, 0.0, 8.75, 8.75, false)),
    glyph("\\Sigma", true, "it", 12.0, "it", Metrics::new(7.58203125, 8.75, 5.640625, 1.171875, 6.8125, 0.0, 8.75, 8.75, false)),
    glyph("\\Upsilon", true, "it", 12.0, "it", Metrics::new(7.330078125, 8.75, 7.375, -0.015625, 7.359375, 0.0, 8.75, 8.75, false)),
    glyph("\\Phi", true, "it", 12.0, "it", Metrics::new(9.4453125, 8.75, 8.09375, 0.671875, 8.765625, 0.0, 8.75, 8.75, false)),
    glyph("\\Psi", true, "it", 12.0, "it", Metrics::new(9.4453125, 8.75, 8.109375, 0.671875, 8.78125, 0.0, 8.75, 8.75, false)),
    glyph("\\Omega", true, "it", 12.0, "it", Metrics::new(9.169921875, 8.859375, 8.265625, 0.453125, 8.71875, 0.0, 8.859375, 8.859375, false)),
    glyph("\\sum", true, "it", 12.0, "it", Metrics::new(8.0859375, 10.921875, 7.703125, 0.140625, 7.84375, -2.296875, 8.625, 8.625, false)),
    glyph("\\prod", true, "it", 12.0, "it", Metrics::new(9.08203125, 10.921875, 7.234375, 0.921875, 8.15625, -2.296875, 8.625, 8.625, false)),
    glyph("\\coprod", true, "it", 12.0, "it", Metrics::new(9.08203125, 10.921875, 7.234375, 0.921875, 8.15625, -2.296875, 8.625, 8.625, false)),
    glyph("\\int", true, "it", 12.0, "it", Metrics::new(6.251953125, 11.625, 4.875, 0.6875, 5.5625, -2.546875, 9.078125, 9.078125, true)),
    glyph("\\oint", true, "it", 12.0, "it", Metrics::new(6.251953125, 11.625, 4.875, 0.6875, 5.5625, -2.546875, 9.078125, 9.078125, true)),
    glyph("\\iint", true, "it", 12.0, "it", Metrics::new(9.46875, 11.625, 8.09375, 0.6875, 8.78125, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\iiint", true, "it", 12.0, "it", Metrics::new(12.685546875, 11.625, 11.3125, 0.6875, 12.0, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\bigcap", true, "it", 12.0, "it", Metrics::new(9.84375, 10.921875, 8.203125, 0.828125, 9.03125, -2.296875, 8.625, 8.625, false)),
    glyph("\\bigcup", true, "it", 12.0, "it", Metrics::new(9.84375, 10.921875, 8.203125, 0.828125, 9.03125, -2.296875, 8.625, 8.625, false)),
    glyph("\\bigvee", true, "it", 12.0, "it", Metrics::new(9.84375, 10.921875, 9.90625, -0.03125, 9.875, -2.296875, 8.625, 8.625, false)),
    glyph("\\bigwedge", true, "it", 12.0, "it", Metrics::new(9.84375, 10.921875, 9.90625, -0.03125, 9.875, -2.296875, 8.625, 8.625, false)),
    glyph("\\bigoplus", true, "it", 12.0, "it", Metrics::new(12.0, 11.34375, 11.3125, 0.34375, 11.65625, -2.375, 8.96875, 8.96875, false)),
    glyph("\\bigotimes", true, "it", 12.0, "it", Metrics::new(12.0, 11.34375, 11.3125, 0.34375, 11.65625, -2.375, 8.96875, 8.96875, false)),
    glyph("\\pm", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.53125, 7.515625, 1.265625, 8.78125, 0.0, 7.53125, 7.53125, false)),
    glyph("\\mp", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.53125, 7.515625, 1.265625, 8.78125, 0.0, 7.53125, 7.53125, false)),
    glyph("\\times", true, "it", 12.0, "it", Metrics::new(10.0546875, 6.78125, 6.78125, 1.640625, 8.421875, 0.375, 7.15625, 7.15625, false)),
    glyph("\\div", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.78125, 7.515625, 1.265625, 8.78125, 0.875, 6.65625, 6.65625, false)),
    glyph("\\cdot", true, "it", 12.0, "it", Metrics::new(3.814453125, 1.484375, 1.234375, 1.28125, 2.515625, 3.421875, 4.90625, 4.90625, false)),
    glyph("\\ast", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.53125, 7.0, 1.53125, 8.53125, 0.0, 7.53125, 7.53125, false)),
    glyph("\\star", true, "it", 12.0, "it", Metrics::new(7.51171875, 4.359375, 4.59375, 1.453125, 6.046875, 1.78125, 6.140625, 6.140625, false)),
    glyph("\\circ", true, "it", 12.0, "it", Metrics::new(7.51171875, 3.71875, 3.703125, 1.90625, 5.609375, 1.921875, 5.640625, 5.640625, false)),
    glyph("\\bullet", true, "it", 12.0, "it", Metrics::new(7.51171875, 3.46875, 3.484375, 2.015625, 5.5, 2.015625, 5.484375, 5.484375, false)),
    glyph("\\cap", true, "it", 12.0, "it", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\cup", true, "it", 12.0, "it", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\uplus", true, "it", 12.0, "it", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.03125, 6.984375, 6.984375, false)),
    glyph("\\sqcap", true, "it", 12.0, "it", Metrics::new(9.36328125, 7.515625, 6.828125, 1.265625, 8.09375, 0.0, 7.515625, 7.515625, false)),
    glyph("\\sqcup", true, "it", 12.0, "it", Metrics::new(9.36328125, 7.515625, 6.828125, 1.265625, 8.09375, 0.0, 7.515625, 7.515625, false)),
    glyph("\\vee", true, "it", 12.0, "it", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\wedge", true, "it", 12.0, "it", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\setminus", true, "it", 12.0, "it", Metrics::new(7.640625, 9.859375, 4.046875, 2.3125, 6.359375, -0.640625, 9.21875, 9.21875, false)),
    glyph("\\wr", true, "it", 12.0, "it", Metrics::new(4.5, 7.515625, 2.0625, 1.21875, 3.28125, 0.0, 7.515625, 7.515625, false)),
    glyph("\\diamond", true, "it", 12.0, "it", Metrics::new(7.51171875, 5.984375, 5.984375, 0.765625, 6.75, 0.765625, 6.75, 6.75, false)),
    glyph("\\oplus", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\ominus", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\otimes", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\oslash", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\odot", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\bigcirc", true, "it", 12.0, "it", Metrics::new(10.470703125, 9.234375, 9.15625, 0.65625, 9.8125, -1.5, 7.734375, 7.734375, false)),
    glyph("\\dagger", true, "it", 12.0, "it", Metrics::new(6.0, 9.90625, 5.34375, 0.328125, 5.671875, -1.15625, 8.75, 8.75, false)),
    glyph("\\ddagger", true, "it", 12.0, "it", Metrics::new(6.0, 9.90625, 5.34375, 0.328125, 5.671875, -1.15625, 8.75, 8.75, false)),
    glyph("\\leq", true, "it", 12.0, "it", Metrics::new(10.0546875, 6.984375, 7.515625, 1.265625, 8.78125, 0.0, 6.984375, 6.984375, false)),
    glyph("\\geq", true, "it", 12.0, "it", Metrics::new(10.0546875, 6.984375, 7.515625, 1.265625, 8.78125, 0.0, 6.984375, 6.984375, false)),
    glyph("\\neq", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.0625, 7.515625, 1.265625, 8.78125, 0.234375, 7.296875, 7.296875, false)),
    glyph("\\equiv", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.375, 7.515625, 1.265625, 8.78125, 1.078125, 6.453125, 6.453125, false)),
    glyph("\\sim", true, "it", 12.0, "it", Metrics::new(10.0546875, 2.0625, 7.515625, 1.265625, 8.78125, 2.734375, 4.796875, 4.796875, false)),
    glyph("\\simeq", true, "it", 12.0, "it", Metrics::new(10.0546875, 3.875, 7.515625, 1.265625, 8.78125, 2.0625, 5.9375, 5.9375, false)),
    glyph("\\approx", true, "it", 12.0, "it", Metrics::new(10.0546875, 4.34375, 7.515625, 1.265625, 8.78125, 1.59375, 5.9375, 5.9375, false)),
    glyph("\\cong", true, "it", 12.0, "it", Metrics::new(10.0546875, 6.046875, 7.515625, 1.265625, 8.78125, 1.078125, 7.125, 7.125, false)),
    glyph("\\propto", true, "it", 12.0, "it", Metrics::new(8.572265625, 4.5, 5.984375, 1.296875, 7.28125, 1.34375, 5.84375, 5.84375, false)),
    glyph("\\subset", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.609375, 7.65625, 1.203125, 8.859375, 0.953125, 6.5625, 6.5625, false)),
    glyph("\\supset", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.609375, 7.65625, 1.203125, 8.859375, 0.953125, 6.5625, 6.5625, false)),
    glyph("\\subseteq", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.359375, 7.671875, 1.109375, 8.78125, 0.0, 7.359375, 7.359375, false)),
    glyph("\\supseteq", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.359375, 7.671875, 1.265625, 8.9375, 0.0, 7.359375, 7.359375, false)),
    glyph("\\in", true, "it", 12.0, "it", Metrics::new(10.453125, 8.625, 8.390625, 1.03125, 9.421875, -0.109375, 8.515625, 8.515625, false)),
    glyph("\\ni", true, "it", 12.0, "it", Metrics::new(10.453125, 8.625, 8.390625, 1.03125, 9.421875, -0.109375, 8.515625, 8.515625, false)),
    glyph("\\notin", true, "it", 12.0, "it", Metrics::new(10.453125, 11.6875, 8.390625, 1.03125, 9.421875, -1.65625, 10.03125, 10.03125, false)),
    glyph("\\ll", true, "it", 12.0, "it", Metrics::new(12.5625, 7.046875, 10.828125, 0.875, 11.703125, 0.265625, 7.3125, 7.3125, false)),
    glyph("\\gg", true, "it", 12.0, "it", Metrics::new(12.5625, 7.046875, 10.828125, 0.875, 11.703125, 0.265625, 7.3125, 7.3125, false)),
    glyph("\\prec", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.421875, 7.515625, 1.265625, 8.78125, -0.453125, 7.96875, 7.96875, false)),
    glyph("\\succ", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.421875, 7.515625, 1.265625, 8.78125, -0.453125, 7.96875, 7.96875, false)),
    glyph("\\mid", true, "it", 12.0, "it", Metrics::new(6.0, 11.8125, 0.9375, 2.53125, 3.46875, -2.5625, 9.25, 9.25, false)),
    glyph("\\parallel", true, "it", 12.0, "it", Metrics::new(6.0, 11.8125, 2.8125, 1.59375, 4.40625, -2.5625, 9.25, 9.25, false)),
    glyph("\\vdash", true, "it", 12.0, "it", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\dashv", true, "it", 12.0, "it", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\models", true, "it", 12.0, "it", Metrics::new(6.24609375, 8.40625, 4.203125, 1.03125, 5.234375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\asymp", true, "it", 12.0, "it", Metrics::new(10.0546875, 4.984375, 7.515625, 1.265625, 8.78125, 1.265625, 6.25, 6.25, false)),
    glyph("\\doteq", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.4375, 7.515625, 1.265625, 8.78125, 2.0625, 7.5, 7.5, false)),
    glyph("\\bowtie", true, "it", 12.0, "it", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\leftarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\rightarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\uparrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.796875, 5.140625, 2.453125, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\downarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.796875, 5.140625, 2.453125, 7.59375, -0.046875, 8.75, 8.75, false)),
    glyph("\\leftrightarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.875, 0.59375, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\updownarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.890625, 5.140625, 2.453125, 7.59375, -0.09375, 8.796875, 8.796875, false)),
    glyph("\\Leftarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Rightarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Uparrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.796875, 5.125, 2.46875, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\Downarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.796875, 5.125, 2.46875, 7.59375, -0.046875, 8.75, 8.75, false)),
    glyph("\\Leftrightarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.875, 0.59375, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Updownarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.890625, 5.125, 2.46875, 7.59375, -0.09375, 8.796875, 8.796875, false)),
    glyph("\\mapsto", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\longleftarrow", true, "it", 12.0, "it", Metrics::new(17.203125, 5.125, 15.921875, 0.59375, 16.515625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\longrightarrow", true, "it", 12.0, "it", Metrics::new(17.203125, 5.125, 15.9375, 0.6875, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\hookleftarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.578125, 8.765625, 0.59375, 9.359375, 1.203125, 6.78125, 6.78125, false)),
    glyph("\\hookrightarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.578125, 8.78125, 0.6875, 9.46875, 1.203125, 6.78125, 6.78125, false)),
    glyph("\\nearrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 6.734375, 6.75, 1.6875, 8.4375, 0.3125, 7.046875, 7.046875, false)),
    glyph("\\searrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 6.734375, 6.75, 1.6875, 8.4375, 0.3125, 7.046875, 7.046875, false)),
    glyph("\\swarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 6.734375, 6.75, 1.6875, 8.4375, 0.3125, 7.046875, 7.046875, false)),
    glyph("\\nwarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 6.734375, 6.75, 1.6875, 8.4375, 0.3125, 7.046875, 7.046875, false)),
    glyph("\\leftharpoonup", true, "it", 12.0, "it", Metrics::new(10.0546875, 3.0625, 8.78125, 0.59375, 9.375, 3.265625, 6.328125, 6.328125, false)),
    glyph("\\rightharpoonup", true, "it", 12.0, "it", Metrics::new(10.0546875, 3.0625, 8.78125, 0.6875, 9.46875, 3.265625, 6.328125, 6.328125, false)),
    glyph("\\rightleftharpoons", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.359375, 8.875, 0.59375, 9.46875, 0.078125, 7.4375, 7.4375, false)),
    glyph("\\infty", true, "it", 12.0, "it", Metrics::new(9.99609375, 4.5, 7.40625, 1.296875, 8.703125, 1.34375, 5.84375, 5.84375, false)),
    glyph("\\partial", true, "it", 12.0, "it", Metrics::new(6.205078125, 8.125, 5.09375, 0.5625, 5.65625, -0.171875, 7.953125, 7.953125, false)),
    glyph("\\nabla", true, "it", 12.0, "it", Metrics::new(8.02734375, 8.625, 8.09375, -0.03125, 8.0625, 0.0, 8.625, 8.625, false)),
    glyph("\\forall", true, "it", 12.0, "it", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("\\exists", true, "it", 12.0, "it", Metrics::new(7.58203125, 8.75, 5.640625, 1.171875, 6.8125, 0.0, 8.75, 8.75, false)),
    glyph("\\neg", true, "it", 12.0, "it", Metrics::new(10.0546875, 3.359375, 7.515625, 1.265625, 8.78125, 1.6875, 5.046875, 5.046875, false)),
    glyph("\\emptyset", true, "it", 12.0, "it", Metrics::new(10.453125, 8.625, 8.640625, 0.90625, 9.546875, -0.109375, 8.515625, 8.515625, false)),
    glyph("\\aleph", true, "it", 12.0, "it", Metrics::new(8.94140625, 9.078125, 7.9375, 0.609375, 8.546875, -0.171875, 8.90625, 8.90625, true)),
    glyph("\\hbar", true, "it", 12.0, "it", Metrics::new(8.337890625, 9.125, 6.375, 0.546875, 6.921875, 0.0, 9.125, 9.125, true)),
    glyph("\\ell", true, "it", 12.0, "it", Metrics::new(4.95703125, 9.078125, 4.390625, -0.15625, 4.234375, -0.171875, 8.90625, 8.90625, true)),
    glyph("\\wp", true, "it", 12.0, "it", Metrics::new(8.3671875, 8.59375, 7.25, 0.640625, 7.890625, -2.65625, 5.9375, 5.9375, false)),
    glyph("\\Re", true, "it", 12.0, "it", Metrics::new(9.767578125, 9.078125, 9.15625, 0.484375, 9.640625, -0.171875, 8.90625, 8.90625, true)),
    glyph("\\Im", true, "it", 12.0, "it", Metrics::new(8.3671875, 9.078125, 7.28125, 0.625, 7.90625, -0.171875, 8.90625, 8.90625, true)),
    glyph("\\prime", true, "it", 12.0, "it", Metrics::new(2.724609375, 2.1875, 2.203125, 0.234375, 2.4375, 6.5625, 8.75, 8.75, false)),
    glyph("\\angle", true, "it", 12.0, "it", Metrics::new(10.7578125, 8.75, 8.390625, 1.03125, 9.421875, 0.0, 8.75, 8.75, false)),
    glyph("\\triangle", true, "it", 12.0, "it", Metrics::new(9.228515625, 9.1875, 9.15625, 0.03125, 9.1875, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\surd", true, "it", 12.0, "it", Metrics::new(7.646484375, 9.96875, 7.28125, 0.359375, 7.640625, -0.234375, 9.734375, 9.734375, false)),
    glyph("\\top", true, "it", 12.0, "it", Metrics::new(10.453125, 8.40625, 8.390625, 1.03125, 9.421875, 0.0, 8.40625, 8.40625, false)),
    glyph("\\bot", true, "it", 12.0, "it", Metrics::new(10.453125, 8.40625, 8.390625, 1.03125, 9.421875, 0.0, 8.40625, 8.40625, false)),
    glyph("\\flat", true, "it", 12.0, "it", Metrics::new(5.66015625, 8.796875, 3.640625, 1.0625, 4.703125, -0.03125, 8.765625, 8.765625, false)),
    glyph("\\natural", true, "it", 12.0, "it", Metrics::new(4.2890625, 8.765625, 2.265625, 1.015625, 3.28125, 0.0, 8.765625, 8.765625, false)),
    glyph("\\sharp", true, "it", 12.0, "it", Metrics::new(5.806640625, 8.765625, 3.796875, 1.015625, 4.8125, 0.0, 8.765625, 8.765625, false)),
    glyph("\\clubsuit", true, "it", 12.0, "it", Metrics::new(10.7578125, 8.75, 8.078125, 1.34375, 9.421875, 0.0, 8.75, 8.75, false)),
    glyph("\\diamondsuit", true, "it", 12.0, "it", Metrics::new(10.7578125, 8.75, 6.71875, 2.015625, 8.734375, 0.0, 8.75, 8.75, false)),
    glyph("\\heartsuit", true, "it", 12.0, "it", Metrics::new(10.7578125, 8.71875, 8.59375, 1.078125, 9.671875, 0.0, 8.71875, 8.71875, false)),
    glyph("\\spadesuit", true, "it", 12.0, "it", Metrics::new(10.7578125, 8.75, 6.96875, 1.890625, 8.859375, 0.0, 8.75, 8.75, false)),
    glyph("\\ldots", true, "it", 12.0, "it", Metrics::new(12.0, 1.484375, 9.234375, 1.390625, 10.625, 0.0, 1.484375, 1.484375, false)),
    glyph("\\cdots", true, "it", 12.0, "it", Metrics::new(12.0, 1.5, 9.21875, 1.390625, 10.609375, 2.984375, 4.484375, 4.484375, false)),
    glyph("\\vdots", true, "it", 12.0, "it", Metrics::new(12.0, 9.6875, 1.234375, 5.375, 6.609375, -1.109375, 8.578125, 8.578125, false)),
    glyph("\\ddots", true, "it", 12.0, "it", Metrics::new(12.0, 9.6875, 9.21875, 1.390625, 10.609375, -1.109375, 8.578125, 8.578125, false)),
    glyph("\\langle", true, "it", 12.0, "it", Metrics::new(4.681640625, 10.6875, 2.640625, 1.078125, 3.71875, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\rangle", true, "it", 12.0, "it", Metrics::new(4.681640625, 10.6875, 2.640625, 0.96875, 3.609375, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\lfloor", true, "it", 12.0, "it", Metrics::new(4.681640625, 10.703125, 2.484375, 1.03125, 3.515625, -1.578125, 9.125, 9.125, false)),
    glyph("\\rfloor", true, "it", 12.0, "it", Metrics::new(4.681640625, 10.703125, 2.484375, 1.171875, 3.65625, -1.578125, 9.125, 9.125, false)),
    glyph("\\lceil", true, "it", 12.0, "it", Metrics::new(4.681640625, 10.703125, 2.484375, 1.03125, 3.515625, -1.578125, 9.125, 9.125, false)),
    glyph("\\rceil", true, "it", 12.0, "it", Metrics::new(4.681640625, 10.703125, 2.484375, 1.171875, 3.65625, -1.578125, 9.125, 9.125, false)),
    glyph("\\lbrace", true, "it", 12.0, "it", Metrics::new(7.634765625, 11.078125, 4.640625, 1.5, 6.140625, -1.953125, 9.125, 9.125, false)),
    glyph("\\rbrace", true, "it", 12.0, "it", Metrics::new(7.634765625, 11.078125, 4.640625, 1.5, 6.140625, -1.953125, 9.125, 9.125, false)),
    glyph("\\vert", true, "it", 12.0, "it", Metrics::new(4.04296875, 12.0, 0.984375, 1.53125, 2.515625, -2.828125, 9.171875, 9.171875, false)),
    glyph("\\Vert", true, "it", 12.0, "it", Metrics::new(6.0, 12.0, 2.921875, 1.53125, 4.453125, -2.828125, 9.171875, 9.171875, false)),
    glyph("\\backslash", true, "it", 12.0, "it", Metrics::new(4.04296875, 9.859375, 4.046875, 0.0, 4.046875, -1.109375, 8.75, 8.75, false)),
    glyph("\\S", true, "it", 12.0, "it", Metrics::new(6.0, 10.046875, 4.90625, 0.546875, 5.453125, -1.140625, 8.90625, 8.90625, false)),
    glyph("\\P", true, "it", 12.0, "it", Metrics::new(7.634765625, 9.90625, 5.40625, 0.921875, 6.328125, -1.15625, 8.75, 8.75, false)),
    glyph("\\copyright", true, "it", 12.0, "it", Metrics::new(12.0, 8.703125, 8.6875, 1.65625, 10.34375, 0.0, 8.703125, 8.703125, false)),
    glyph("\\degree", true, "it", 12.0, "it", Metrics::new(6.0, 3.71875, 3.71875, 1.140625, 4.859375, 5.1875, 8.90625, 8.90625, false)),
    glyph("\\imath", true, "it", 12.0, "it", Metrics::new(3.333984375, 6.5625, 2.359375, 0.421875, 2.78125, 0.0, 6.5625, 6.5625, true)),
    glyph("\\jmath", true, "it", 12.0, "it", Metrics::new(3.333984375, 9.0625, 4.171875, -1.359375, 2.8125, -2.5, 6.5625, 6.5625, true)),
    glyph("\\nleftarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\nrightarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\twoheadleftarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\twoheadrightarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\leftarrowtail", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\rightarrowtail", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\mapsfrom", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\mapsup", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.796875, 5.125, 2.46875, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\mapsdown", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.796875, 5.125, 2.46875, 7.59375, -0.046875, 8.75, 8.75, false)),
    glyph("\\looparrowleft", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.578125, 8.765625, 0.59375, 9.359375, 1.203125, 6.78125, 6.78125, false)),
    glyph("\\looparrowright", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.578125, 8.78125, 0.6875, 9.46875, 1.203125, 6.78125, 6.78125, false)),
    glyph("\\leftrightsquigarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.875, 0.59375, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\nleftrightarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.296875, 8.875, 0.59375, 9.46875, 1.109375, 6.40625, 6.40625, false)),
    glyph("\\Lsh", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.921875, 5.515625, 2.03125, 7.546875, 0.0, 8.921875, 8.921875, false)),
    glyph("\\Rsh", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.921875, 5.515625, 2.515625, 8.03125, 0.0, 8.921875, 8.921875, false)),
    glyph("\\curvearrowleft", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.578125, 9.328125, 0.265625, 9.59375, 2.4375, 8.015625, 8.015625, false)),
    glyph("\\curvearrowright", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.578125, 9.328125, 0.46875, 9.796875, 2.4375, 8.015625, 8.015625, false)),
    glyph("\\circlearrowleft", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.40625, 7.90625, 1.234375, 9.140625, 0.75, 8.15625, 8.15625, false)),
    glyph("\\circlearrowright", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.40625, 7.90625, 0.921875, 8.828125, 0.75, 8.15625, 8.15625, false)),
    glyph("\\leftharpoondown", true, "it", 12.0, "it", Metrics::new(10.0546875, 3.0625, 8.78125, 0.59375, 9.375, 1.203125, 4.265625, 4.265625, false)),
    glyph("\\upharpoonright", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.796875, 3.0625, 4.53125, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\upharpoonleft", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.796875, 3.078125, 2.453125, 5.53125, 0.0, 8.796875, 8.796875, false)),
    glyph("\\rightharpoondown", true, "it", 12.0, "it", Metrics::new(10.0546875, 3.0625, 8.78125, 0.6875, 9.46875, 1.203125, 4.265625, 4.265625, false)),
    glyph("\\downharpoonright", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.796875, 3.0625, 4.53125, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\downharpoonleft", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.796875, 3.078125, 2.453125, 5.53125, 0.0, 8.796875, 8.796875, false)),
    glyph("\\rightleftarrows", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.65625, 8.875, 0.59375, 9.46875, -0.5625, 8.09375, 8.09375, false)),
    glyph("\\leftrightarrows", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.65625, 8.875, 0.59375, 9.46875, -0.5625, 8.09375, 8.09375, false)),
    glyph("\\leftleftarrows", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.65625, 8.78125, 0.59375, 9.375, -0.5625, 8.09375, 8.09375, false)),
    glyph("\\upuparrows", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.796875, 8.65625, 0.703125, 9.359375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\rightrightarrows", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.65625, 8.78125, 0.6875, 9.46875, -0.5625, 8.09375, 8.09375, false)),
    glyph("\\downdownarrows", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.796875, 8.65625, 0.703125, 9.359375, -0.046875, 8.75, 8.75, false)),
    glyph("\\leftrightharpoons", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.359375, 8.875, 0.59375, 9.46875, 0.078125, 7.4375, 7.4375, false)),
    glyph("\\nLeftarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\nLeftrightarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.265625, 8.875, 0.59375, 9.46875, 1.125, 6.390625, 6.390625, false)),
    glyph("\\nRightarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Lleftarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Rrightarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\leftsquigarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\rightsquigarrow", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\longleftrightarrow", true, "it", 12.0, "it", Metrics::new(17.203125, 5.125, 16.03125, 0.59375, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Longleftarrow", true, "it", 12.0, "it", Metrics::new(17.203125, 5.125, 15.921875, 0.59375, 16.515625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Longrightarrow", true, "it", 12.0, "it", Metrics::new(17.203125, 5.125, 15.9375, 0.6875, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Longleftrightarrow", true, "it", 12.0, "it", Metrics::new(17.203125, 5.125, 16.03125, 0.59375, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\longmapsto", true, "it", 12.0, "it", Metrics::new(17.203125, 5.125, 15.9375, 0.6875, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\nmid", true, "it", 12.0, "it", Metrics::new(6.0, 11.8125, 4.8125, 0.59375, 5.40625, -2.5625, 9.25, 9.25, false)),
    glyph("\\nparallel", true, "it", 12.0, "it", Metrics::new(6.0, 11.8125, 4.8125, 0.59375, 5.40625, -2.5625, 9.25, 9.25, false)),
    glyph("\\backsim", true, "it", 12.0, "it", Metrics::new(10.0546875, 2.0625, 7.515625, 1.265625, 8.78125, 2.734375, 4.796875, 4.796875, false)),
    glyph("\\nsim", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.71875, 7.515625, 1.265625, 8.78125, 0.921875, 6.640625, 6.640625, false)),
    glyph("\\eqsim", true, "it", 12.0, "it", Metrics::new(10.0546875, 3.859375, 7.515625, 1.265625, 8.78125, 1.59375, 5.453125, 5.453125, false)),
    glyph("\\ncong", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.953125, 7.515625, 1.265625, 8.78125, -0.0625, 7.890625, 7.890625, false)),
    glyph("\\napprox", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.46875, 7.515625, 1.265625, 8.78125, 0.03125, 7.5, 7.5, false)),
    glyph("\\approxeq", true, "it", 12.0, "it", Metrics::new(10.0546875, 6.09375, 7.515625, 1.265625, 8.78125, 1.078125, 7.171875, 7.171875, false)),
    glyph("\\allequal", true, "it", 12.0, "it", Metrics::new(10.0546875, 6.046875, 7.515625, 1.265625, 8.78125, 1.078125, 7.125, 7.125, false)),
    glyph("\\Bumpeq", true, "it", 12.0, "it", Metrics::new(10.0546875, 6.890625, 7.515625, 1.265625, 8.78125, 0.3125, 7.203125, 7.203125, false)),
    glyph("\\bumpeq", true, "it", 12.0, "it", Metrics::new(10.0546875, 5.140625, 7.515625, 1.265625, 8.78125, 2.0625, 7.203125, 7.203125, false)),
    glyph("\\Doteq", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.484375, 7.515625, 1.265625, 8.78125, 0.015625, 7.5, 7.5, false)),
    glyph("\\fallingdotseq", true, "it", 12.0, "it", Metrics::new(10.06640625, 7.46875, 7.53125, 1.265625, 8.796875, 0.03125, 7.5, 7.5, false)),
    glyph("\\risingdotseq", true, "it", 12.0, "it", Metrics::new(10.06640625, 7.46875, 7.53125, 1.265625, 8.796875, 0.03125, 7.5, 7.5, false)),
    glyph("\\coloneq", true, "it", 12.0, "it", Metrics::new(12.0, 3.90625, 9.578125, 1.21875, 10.796875, 1.8125, 5.71875, 5.71875, false)),
    glyph("\\eqcolon", true, "it", 12.0, "it", Metrics::new(12.0, 3.890625, 9.59375, 1.203125, 10.796875, 1.8125, 5.703125, 5.703125, false)),
    glyph("\\eqcirc", true, "it", 12.0, "it", Metrics::new(10.0546875, 3.390625, 7.515625, 1.265625, 8.78125, 2.0625, 5.453125, 5.453125, false)),
    glyph("\\circeq", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.0625, 7.515625, 1.265625, 8.78125, 2.0625, 9.125, 9.125, false)),
    glyph("\\wedgeq", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.6875, 7.515625, 1.265625, 8.78125, 2.0625, 9.75, 9.75, false)),
    glyph("\\veeeq", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.6875, 7.515625, 1.265625, 8.78125, 2.0625, 9.75, 9.75, false)),
    glyph("\\stareq", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.125, 7.515625, 1.265625, 8.78125, 2.0625, 10.1875, 10.1875, false)),
    glyph("\\triangleq", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.1875, 7.515625, 1.265625, 8.78125, 2.0625, 10.25, 10.25, false)),
    glyph("\\nequiv", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.109375, 7.515625, 1.265625, 8.78125, -0.296875, 7.8125, 7.8125, false)),
    glyph("\\leqq", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.65625, 7.515625, 1.28125, 8.796875, -1.0, 7.65625, 7.65625, false)),
    glyph("\\geqq", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.65625, 7.515625, 1.28125, 8.796875, -1.0, 7.65625, 7.65625, false)),
    glyph("\\lneqq", true, "it", 12.0, "it", Metrics::new(10.0546875, 9.625, 7.515625, 1.28125, 8.796875, -1.96875, 7.65625, 7.65625, false)),
    glyph("\\gneqq", true, "it", 12.0, "it", Metrics::new(10.0546875, 9.625, 7.515625, 1.28125, 8.796875, -1.96875, 7.65625, 7.65625, false)),
    glyph("\\between", true, "it", 12.0, "it", Metrics::new(5.56640625, 10.6875, 3.5, 1.03125, 4.53125, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\nless", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.0625, 7.515625, 1.265625, 8.78125, 0.03125, 8.09375, 8.09375, false)),
    glyph("\\ngtr", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.0625, 7.515625, 1.265625, 8.78125, -0.5625, 7.5, 7.5, false)),
    glyph("\\nleq", true, "it", 12.0, "it", Metrics::new(10.0546875, 9.21875, 7.515625, 1.265625, 8.78125, -1.21875, 8.0, 8.0, false)),
    glyph("\\ngeq", true, "it", 12.0, "it", Metrics::new(10.0546875, 9.21875, 7.515625, 1.265625, 8.78125, -1.21875, 8.0, 8.0, false)),
    glyph("\\lesssim", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.640625, 7.53125, 1.265625, 8.796875, -0.65625, 6.984375, 6.984375, false)),
    glyph("\\gtrsim", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.453125, 7.515625, 1.28125, 8.796875, -0.46875, 6.984375, 6.984375, false)),
    glyph("\\lessgtr", true, "it", 12.0, "it", Metrics::new(10.0546875, 9.28125, 7.578125, 1.21875, 8.796875, -1.046875, 8.234375, 8.234375, false)),
    glyph("\\gtrless", true, "it", 12.0, "it", Metrics::new(10.0546875, 9.28125, 7.578125, 1.21875, 8.796875, -1.046875, 8.234375, 8.234375, false)),
    glyph("\\preccurlyeq", true, "it", 12.0, "it", Metrics::new(10.0546875, 9.28125, 7.515625, 1.265625, 8.78125, -1.265625, 8.015625, 8.015625, false)),
    glyph("\\succcurlyeq", true, "it", 12.0, "it", Metrics::new(10.0546875, 9.28125, 7.515625, 1.265625, 8.78125, -1.265625, 8.015625, 8.015625, false)),
    glyph("\\precsim", true, "it", 12.0, "it", Metrics::new(10.0546875, 9.03125, 7.515625, 1.265625, 8.78125, -1.015625, 8.015625, 8.015625, false)),
    glyph("\\succsim", true, "it", 12.0, "it", Metrics::new(10.0546875, 9.03125, 7.515625, 1.265625, 8.78125, -1.015625, 8.015625, 8.015625, false)),
    glyph("\\nprec", true, "it", 12.0, "it", Metrics::new(10.0546875, 9.90625, 7.515625, 1.265625, 8.78125, -0.734375, 9.171875, 9.171875, false)),
    glyph("\\nsucc", true, "it", 12.0, "it", Metrics::new(10.0546875, 9.90625, 7.515625, 1.265625, 8.78125, -1.65625, 8.25, 8.25, false)),
    glyph("\\nsubset", true, "it", 12.0, "it", Metrics::new(10.0546875, 9.875, 7.65625, 1.203125, 8.859375, -1.15625, 8.71875, 8.71875, false)),
    glyph("\\nsupset", true, "it", 12.0, "it", Metrics::new(10.0546875, 9.875, 7.65625, 1.203125, 8.859375, -1.203125, 8.671875, 8.671875, false)),
    glyph("\\nsubseteq", true, "it", 12.0, "it", Metrics::new(10.0546875, 10.15625, 7.671875, 1.109375, 8.78125, -1.390625, 8.765625, 8.765625, false)),
    glyph("\\nsupseteq", true, "it", 12.0, "it", Metrics::new(10.0546875, 10.15625, 7.671875, 1.265625, 8.9375, -1.390625, 8.765625, 8.765625, false)),
    glyph("\\subsetneq", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.234375, 7.671875, 1.109375, 8.78125, -0.875, 7.359375, 7.359375, false)),
    glyph("\\supsetneq", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.234375, 7.671875, 1.109375, 8.78125, -0.875, 7.359375, 7.359375, false)),
    glyph("\\sqsubset", true, "it", 12.0, "it", Metrics::new(10.0546875, 6.8125, 7.515625, 1.265625, 8.78125, 0.0, 6.8125, 6.8125, false)),
    glyph("\\sqsupset", true, "it", 12.0, "it", Metrics::new(10.0546875, 6.8125, 7.515625, 1.265625, 8.78125, 0.0, 6.8125, 6.8125, false)),
    glyph("\\sqsubseteq", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.5625, 7.515625, 1.265625, 8.78125, -1.0, 7.5625, 7.5625, false)),
    glyph("\\sqsupseteq", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.5625, 7.515625, 1.265625, 8.78125, -1.0, 7.5625, 7.5625, false)),
    glyph("\\vDash", true, "it", 12.0, "it", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\Vdash", true, "it", 12.0, "it", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\Vvdash", true, "it", 12.0, "it", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\VDash", true, "it", 12.0, "it", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\nvdash", true, "it", 12.0, "it", Metrics::new(10.453125, 9.34375, 8.40625, 1.03125, 9.4375, -0.46875, 8.875, 8.875, false)),
    glyph("\\nvDash", true, "it", 12.0, "it", Metrics::new(10.453125, 9.34375, 8.40625, 1.03125, 9.4375, -0.46875, 8.875, 8.875, false)),
    glyph("\\nVdash", true, "it", 12.0, "it", Metrics::new(10.453125, 9.34375, 8.40625, 1.03125, 9.4375, -0.46875, 8.875, 8.875, false)),
    glyph("\\nVDash", true, "it", 12.0, "it", Metrics::new(10.453125, 9.34375, 8.40625, 1.03125, 9.4375, -0.46875, 8.875, 8.875, false)),
    glyph("\\vartriangleleft", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.171875, 7.515625, 1.265625, 8.78125, 0.171875, 7.34375, 7.34375, false)),
    glyph("\\vartriangleright", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.171875, 7.515625, 1.265625, 8.78125, 0.171875, 7.34375, 7.34375, false)),
    glyph("\\trianglelefteq", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.671875, 7.515625, 1.265625, 8.78125, -0.578125, 8.09375, 8.09375, false)),
    glyph("\\trianglerighteq", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.671875, 7.515625, 1.265625, 8.78125, -0.578125, 8.09375, 8.09375, false)),
    glyph("\\multimap", true, "it", 12.0, "it", Metrics::new(10.0546875, 3.34375, 8.90625, 0.578125, 9.484375, 2.109375, 5.453125, 5.453125, false)),
    glyph("\\backsimeq", true, "it", 12.0, "it", Metrics::new(10.0546875, 3.875, 7.515625, 1.265625, 8.78125, 2.0625, 5.9375, 5.9375, false)),
    glyph("\\Subset", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.59375, 7.671875, 1.109375, 8.78125, -0.03125, 7.5625, 7.5625, false)),
    glyph("\\Supset", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.59375, 7.671875, 1.265625, 8.9375, -0.03125, 7.5625, 7.5625, false)),
    glyph("\\pitchfork", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.75, 5.59375, 2.234375, 7.828125, 0.0, 8.75, 8.75, false)),
    glyph("\\lessdot", true, "it", 12.0, "it", Metrics::new(10.0546875, 6.421875, 7.515625, 1.265625, 8.78125, 0.546875, 6.96875, 6.96875, false)),
    glyph("\\gtrdot", true, "it", 12.0, "it", Metrics::new(10.0546875, 6.421875, 7.515625, 1.265625, 8.78125, 0.546875, 6.96875, 6.96875, false)),
    glyph("\\lll", true, "it", 12.0, "it", Metrics::new(17.068359375, 7.046875, 15.328125, 0.875, 16.203125, 0.265625, 7.3125, 7.3125, false)),
    glyph("\\ggg", true, "it", 12.0, "it", Metrics::new(17.068359375, 7.046875, 15.328125, 0.875, 16.203125, 0.265625, 7.3125, 7.3125, false)),
    glyph("\\lesseqgtr", true, "it", 12.0, "it", Metrics::new(10.0546875, 12.984375, 7.515625, 1.265625, 8.78125, -2.734375, 10.25, 10.25, false)),
    glyph("\\gtreqless", true, "it", 12.0, "it", Metrics::new(10.0546875, 12.984375, 7.515625, 1.265625, 8.78125, -2.734375, 10.25, 10.25, false)),
    glyph("\\curlyeqprec", true, "it", 12.0, "it", Metrics::new(10.0546875, 9.28125, 7.515625, 1.265625, 8.78125, -1.265625, 8.015625, 8.015625, false)),
    glyph("\\curlyeqsucc", true, "it", 12.0, "it", Metrics::new(10.0546875, 9.28125, 7.515625, 1.265625, 8.78125, -1.265625, 8.015625, 8.015625, false)),
    glyph("\\npreccurlyeq", true, "it", 12.0, "it", Metrics::new(10.0546875, 11.3125, 7.515625, 1.265625, 8.78125, -2.140625, 9.171875, 9.171875, false)),
    glyph("\\nsucccurlyeq", true, "it", 12.0, "it", Metrics::new(10.0546875, 11.3125, 7.515625, 1.265625, 8.78125, -2.140625, 9.171875, 9.171875, false)),
    glyph("\\nsqsubseteq", true, "it", 12.0, "it", Metrics::new(10.0546875, 10.890625, 7.515625, 1.265625, 8.78125, -1.6875, 9.203125, 9.203125, false)),
    glyph("\\nsqsupseteq", true, "it", 12.0, "it", Metrics::new(10.0546875, 10.890625, 7.515625, 1.265625, 8.78125, -1.6875, 9.203125, 9.203125, false)),
    glyph("\\lnsim", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.640625, 7.53125, 1.265625, 8.796875, -1.65625, 6.984375, 6.984375, false)),
    glyph("\\gnsim", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.640625, 7.53125, 1.265625, 8.796875, -1.65625, 6.984375, 6.984375, false)),
    glyph("\\precnsim", true, "it", 12.0, "it", Metrics::new(10.0546875, 10.046875, 7.515625, 1.265625, 8.78125, -2.03125, 8.015625, 8.015625, false)),
    glyph("\\succnsim", true, "it", 12.0, "it", Metrics::new(10.0546875, 10.0625, 7.515625, 1.3125, 8.828125, -2.046875, 8.015625, 8.015625, false)),
    glyph("\\ntriangleleft", true, "it", 12.0, "it", Metrics::new(10.0546875, 10.640625, 7.515625, 1.265625, 8.78125, -1.5625, 9.078125, 9.078125, false)),
    glyph("\\ntriangleright", true, "it", 12.0, "it", Metrics::new(10.0546875, 10.640625, 7.515625, 1.265625, 8.78125, -1.5625, 9.078125, 9.078125, false)),
    glyph("\\ntrianglelefteq", true, "it", 12.0, "it", Metrics::new(10.0546875, 12.046875, 7.515625, 1.265625, 8.78125, -2.265625, 9.78125, 9.78125, false)),
    glyph("\\ntrianglerighteq", true, "it", 12.0, "it", Metrics::new(10.0546875, 12.046875, 7.515625, 1.25, 8.765625, -2.265625, 9.78125, 9.78125, false)),
    glyph("\\leqslant", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -1.46875, 6.96875, 6.96875, false)),
    glyph("\\geqslant", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -1.46875, 6.96875, 6.96875, false)),
    glyph("\\lessapprox", true, "it", 12.0, "it", Metrics::new(10.0546875, 9.546875, 7.53125, 1.265625, 8.796875, -1.59375, 7.953125, 7.953125, false)),
    glyph("\\gtrapprox", true, "it", 12.0, "it", Metrics::new(10.0546875, 9.546875, 7.53125, 1.265625, 8.796875, -1.59375, 7.953125, 7.953125, false)),
    glyph("\\lneq", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -1.453125, 6.984375, 6.984375, false)),
    glyph("\\gneq", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -1.453125, 6.984375, 6.984375, false)),
    glyph("\\lnapprox", true, "it", 12.0, "it", Metrics::new(10.0546875, 10.390625, 7.53125, 1.265625, 8.796875, -2.4375, 7.953125, 7.953125, false)),
    glyph("\\gnapprox", true, "it", 12.0, "it", Metrics::new(10.0546875, 10.390625, 7.53125, 1.265625, 8.796875, -2.4375, 7.953125, 7.953125, false)),
    glyph("\\lesseqqgtr", true, "it", 12.0, "it", Metrics::new(10.0546875, 13.21875, 7.515625, 1.265625, 8.78125, -3.71875, 9.5, 9.5, false)),
    glyph("\\gtreqqless", true, "it", 12.0, "it", Metrics::new(10.0546875, 13.21875, 7.515625, 1.265625, 8.78125, -3.71875, 9.5, 9.5, false)),
    glyph("\\eqslantless", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -0.71875, 7.71875, 7.71875, false)),
    glyph("\\eqslantgtr", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -0.71875, 7.71875, 7.71875, false)),
    glyph("\\preceq", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.296875, 7.515625, 1.265625, 8.78125, -0.28125, 8.015625, 8.015625, false)),
    glyph("\\succeq", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.296875, 7.515625, 1.265625, 8.78125, -0.28125, 8.015625, 8.015625, false)),
    glyph("\\precneqq", true, "it", 12.0, "it", Metrics::new(10.0546875, 10.28125, 7.515625, 1.265625, 8.78125, -2.34375, 7.9375, 7.9375, false)),
    glyph("\\succneqq", true, "it", 12.0, "it", Metrics::new(10.0546875, 10.28125, 7.515625, 1.265625, 8.78125, -2.34375, 7.9375, 7.9375, false)),
    glyph("\\precapprox", true, "it", 12.0, "it", Metrics::new(10.0546875, 10.609375, 7.515625, 1.265625, 8.78125, -2.296875, 8.3125, 8.3125, false)),
    glyph("\\succapprox", true, "it", 12.0, "it", Metrics::new(10.0546875, 10.609375, 7.515625, 1.265625, 8.78125, -2.296875, 8.3125, 8.3125, false)),
    glyph("\\precnapprox", true, "it", 12.0, "it", Metrics::new(10.0546875, 11.421875, 7.53125, 1.265625, 8.796875, -3.109375, 8.3125, 8.3125, false)),
    glyph("\\succnapprox", true, "it", 12.0, "it", Metrics::new(10.0546875, 11.421875, 7.53125, 1.265625, 8.796875, -3.109375, 8.3125, 8.3125, false)),
    glyph("\\dotplus", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.75, 7.515625, 1.265625, 8.78125, 0.0, 8.75, 8.75, false)),
    glyph("\\smallsetminus", true, "it", 12.0, "it", Metrics::new(7.640625, 9.859375, 4.046875, 2.3125, 6.359375, -0.640625, 9.21875, 9.21875, false)),
    glyph("\\dotminus", true, "it", 12.0, "it", Metrics::new(10.0546875, 3.359375, 7.515625, 1.265625, 8.78125, 3.265625, 6.625, 6.625, false)),
    glyph("\\cupdot", true, "it", 12.0, "it", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\circledcirc", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\circledast", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\circleddash", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\boxplus", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\boxminus", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\boxtimes", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\boxdot", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\intercal", true, "it", 12.0, "it", Metrics::new(6.24609375, 8.40625, 3.46875, 1.390625, 4.859375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\veebar", true, "it", 12.0, "it", Metrics::new(8.783203125, 8.890625, 6.4375, 1.171875, 7.609375, 0.0, 8.890625, 8.890625, false)),
    glyph("\\barwedge", true, "it", 12.0, "it", Metrics::new(8.783203125, 8.890625, 6.4375, 1.171875, 7.609375, 0.0, 8.890625, 8.890625, false)),
    glyph("\\barvee", true, "it", 12.0, "it", Metrics::new(8.783203125, 8.890625, 6.4375, 1.171875, 7.609375, 0.0, 8.890625, 8.890625, false)),
    glyph("\\divideontimes", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.1875, 7.515625, 1.265625, 8.78125, 0.171875, 7.359375, 7.359375, false)),
    glyph("\\ltimes", true, "it", 12.0, "it", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\rtimes", true, "it", 12.0, "it", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\leftthreetimes", true, "it", 12.0, "it", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\rightthreetimes", true, "it", 12.0, "it", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\curlyvee", true, "it", 12.0, "it", Metrics::new(8.7890625, 6.953125, 7.625, 0.578125, 8.203125, 0.0, 6.953125, 6.953125, false)),
    glyph("\\curlywedge", true, "it", 12.0, "it", Metrics::new(8.7890625, 6.953125, 7.625, 0.578125, 8.203125, 0.0, 6.953125, 6.953125, false)),
    glyph("\\Cap", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.953125, 7.59375, 1.234375, 8.828125, 0.0, 7.953125, 7.953125, false)),
    glyph("\\Cup", true, "it", 12.0, "it", Metrics::new(10.0546875, 7.953125, 7.59375, 1.234375, 8.828125, -0.171875, 7.78125, 7.78125, false)),
    glyph("\\doublebarwedge", true, "it", 12.0, "it", Metrics::new(10.0546875, 6.15625, 5.140625, 2.453125, 7.59375, 0.0, 6.15625, 6.15625, false)),
    glyph("\\bigodot", true, "it", 12.0, "it", Metrics::new(12.0, 11.34375, 11.3125, 0.34375, 11.65625, -2.375, 8.96875, 8.96875, false)),
    glyph("\\oiint", true, "it", 12.0, "it", Metrics::new(9.46875, 11.625, 8.09375, 0.6875, 8.78125, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\oiiint", true, "it", 12.0, "it", Metrics::new(12.685546875, 11.625, 11.3125, 0.6875, 12.0, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\iiiint", true, "it", 12.0, "it", Metrics::new(15.90234375, 11.625, 14.53125, 0.6875, 15.21875, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\minus", true, "it", 12.0, "it", Metrics::new(10.0546875, 1.0, 7.515625, 1.265625, 8.78125, 3.265625, 4.265625, 4.265625, false)),
    glyph("\\cdotp", true, "it", 12.0, "it", Metrics::new(3.814453125, 1.484375, 1.234375, 1.28125, 2.515625, 3.421875, 4.90625, 4.90625, false)),
    glyph("\\hslash", true, "it", 12.0, "it", Metrics::new(7.60546875, 9.125, 6.53125, 0.53125, 7.0625, 0.0, 9.125, 9.125, true)),
    glyph("\\beth", true, "it", 12.0, "it", Metrics::new(8.0859375, 9.078125, 7.859375, -0.03125, 7.828125, -0.171875, 8.90625, 8.90625, true)),
    glyph("\\gimel", true, "it", 12.0, "it", Metrics::new(5.58984375, 9.328125, 4.71875, 0.15625, 4.875, -0.421875, 8.90625, 8.90625, true)),
    glyph("\\daleth", true, "it", 12.0, "it", Metrics::new(7.734375, 9.328125, 6.59375, 0.5, 7.09375, -0.421875, 8.90625, 8.90625, true)),
    glyph("\\mho", true, "it", 12.0, "it", Metrics::new(9.169921875, 8.859375, 8.265625, 0.453125, 8.71875, -0.171875, 8.6875, 8.6875, false)),
    glyph("\\eth", true, "it", 12.0, "it", Metrics::new(7.341796875, 9.296875, 6.5, 0.546875, 7.046875, -0.171875, 9.125, 9.125, true)),
    glyph("\\Finv", true, "it", 12.0, "it", Metrics::new(6.90234375, 8.75, 6.71875, 0.328125, 7.046875, 0.0, 8.75, 8.75, true)),
    glyph("\\Game", true, "it", 12.0, "it", Metrics::new(9.298828125, 9.078125, 7.640625, 0.953125, 8.59375, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\digamma", true, "it", 12.0, "it", Metrics::new(5.501953125, 11.625, 8.203125, -2.203125, 6.0, -2.5, 9.125, 9.125, true)),
    glyph("\\varkappa", true, "it", 12.0, "it", Metrics::new(7.962890625, 7.328125, 7.953125, -0.046875, 7.90625, -0.40625, 6.921875, 6.921875, true)),
    glyph("\\backepsilon", true, "it", 12.0, "it", Metrics::new(7.3828125, 6.890625, 5.09375, 1.15625, 6.25, -0.171875, 6.71875, 6.71875, false)),
    glyph("\\AA", true, "it", 12.0, "it", Metrics::new(8.208984375, 11.140625, 8.03125, -0.640625, 7.390625, 0.0, 11.140625, 11.140625, true)),
    glyph("\\ae", true, "it", 12.0, "it", Metrics::new(11.94140625, 6.890625, 10.921875, 0.5, 11.421875, -0.171875, 6.71875, 6.71875, true)),
    glyph("\\AE", true, "it", 12.0, "it", Metrics::new(11.689453125, 8.75, 12.46875, -0.53125, 11.9375, 0.0, 8.75, 8.75, true)),
    glyph("\\oe", true, "it", 12.0, "it", Metrics::new(12.333984375, 6.890625, 11.265625, 0.546875, 11.8125, -0.171875, 6.71875, 6.71875, true)),
    glyph("\\OE", true, "it", 12.0, "it", Metrics::new(12.837890625, 8.75, 12.25, 0.546875, 12.796875, 0.0, 8.75, 8.75, true)),
    glyph("\\o", true, "it", 12.0, "it", Metrics::new(7.341796875, 7.625, 7.640625, -0.171875, 7.46875, -0.546875, 7.078125, 7.078125, true)),
    glyph("\\O", true, "it", 12.0, "it", Metrics::new(9.4453125, 9.53125, 10.109375, -0.40625, 9.703125, -0.390625, 9.140625, 9.140625, true)),
    glyph("\\ss", true, "it", 12.0, "it", Metrics::new(7.55859375, 9.296875, 6.515625, 0.5625, 7.078125, -0.171875, 9.125, 9.125, true)),
    glyph("\\l", true, "it", 12.0, "it", Metrics::new(3.4453125, 9.125, 3.609375, 0.203125, 3.8125, 0.0, 9.125, 9.125, true)),
    glyph("\\L", true, "it", 12.0, "it", Metrics::new(6.744140625, 8.75, 6.265625, -0.234375, 6.03125, 0.0, 8.75, 8.75, true)),
    glyph("\\complement", true, "it", 12.0, "it", Metrics::new(7.634765625, 9.078125, 5.84375, 0.796875, 6.640625, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\nexists", true, "it", 12.0, "it", Metrics::new(7.58203125, 9.859375, 5.640625, 1.171875, 6.8125, -0.546875, 9.3125, 9.3125, false)),
    glyph("\\varnothing", true, "it", 12.0, "it", Metrics::new(10.453125, 8.625, 8.640625, 0.90625, 9.546875, -0.109375, 8.515625, 8.515625, false)),
    glyph("\\smallin", true, "it", 12.0, "it", Metrics::new(8.61328125, 5.703125, 6.078125, 1.265625, 7.34375, 0.90625, 6.609375, 6.609375, false)),
    glyph("\\QED", true, "it", 12.0, "it", Metrics::new(7.634765625, 5.828125, 4.109375, 1.765625, 5.875, 0.0, 5.828125, 5.828125, false)),
    glyph("\\measuredangle", true, "it", 12.0, "it", Metrics::new(10.7578125, 9.375, 8.390625, 1.03125, 9.421875, -0.625, 8.75, 8.75, false)),
    glyph("\\sphericalangle", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.75, 7.40625, 1.390625, 8.796875, -0.03125, 8.71875, 8.71875, false)),
    glyph("\\rightangle", true, "it", 12.0, "it", Metrics::new(10.0546875, 6.734375, 6.734375, 1.65625, 8.390625, 1.1875, 7.921875, 7.921875, false)),
    glyph("\\therefore", true, "it", 12.0, "it", Metrics::new(7.634765625, 6.046875, 6.21875, 0.703125, 6.921875, 1.203125, 7.25, 7.25, false)),
    glyph("\\because", true, "it", 12.0, "it", Metrics::new(7.634765625, 6.046875, 6.21875, 0.703125, 6.921875, 1.203125, 7.25, 7.25, false)),
    glyph("\\Colon", true, "it", 12.0, "it", Metrics::new(7.634765625, 6.046875, 6.21875, 0.703125, 6.921875, 1.203125, 7.25, 7.25, false)),
    glyph("\\lnot", true, "it", 12.0, "it", Metrics::new(10.0546875, 3.359375, 7.515625, 1.265625, 8.78125, 1.6875, 5.046875, 5.046875, false)),
    glyph("\\sqrt", true, "it", 12.0, "it", Metrics::new(7.646484375, 9.96875, 7.28125, 0.359375, 7.640625, -0.234375, 9.734375, 9.734375, false)),
    glyph("\\dots", true, "it", 12.0, "it", Metrics::new(12.0, 1.484375, 9.234375, 1.390625, 10.625, 0.0, 1.484375, 1.484375, false)),
    glyph("\\adots", true, "it", 12.0, "it", Metrics::new(12.0, 9.6875, 9.21875, 1.390625, 10.609375, -1.109375, 8.578125, 8.578125, false)),
    glyph("\\ulcorner", true, "it", 12.0, "it", Metrics::new(5.625, 4.015625, 3.8125, 1.03125, 4.84375, 5.109375, 9.125, 9.125, false)),
    glyph("\\urcorner", true, "it", 12.0, "it", Metrics::new(5.625, 4.015625, 3.8125, 0.78125, 4.59375, 5.109375, 9.125, 9.125, false)),
    glyph("\\llcorner", true, "it", 12.0, "it", Metrics::new(5.625, 4.015625, 3.8125, 1.03125, 4.84375, -0.84375, 3.171875, 3.171875, false)),
    glyph("\\lrcorner", true, "it", 12.0, "it", Metrics::new(5.625, 4.015625, 3.8125, 0.78125, 4.59375, -0.84375, 3.171875, 3.171875, false)),
    glyph("\\lbrack", true, "it", 12.0, "it", Metrics::new(4.681640625, 10.703125, 2.484375, 1.03125, 3.515625, -1.578125, 9.125, 9.125, false)),
    glyph("\\rbrack", true, "it", 12.0, "it", Metrics::new(4.681640625, 10.703125, 2.484375, 1.171875, 3.65625, -1.578125, 9.125, 9.125, false)),
    glyph("\\leftparen", true, "it", 12.0, "it", Metrics::new(4.681640625, 10.6875, 2.6875, 1.03125, 3.71875, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\rightparen", true, "it", 12.0, "it", Metrics::new(4.681640625, 10.6875, 2.6875, 0.96875, 3.65625, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\bigtriangleup", true, "it", 12.0, "it", Metrics::new(9.228515625, 9.1875, 9.15625, 0.03125, 9.1875, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\vartriangle", true, "it", 12.0, "it", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\blacktriangle", true, "it", 12.0, "it", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\triangleright", true, "it", 12.0, "it", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\blacktriangleright", true, "it", 12.0, "it", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\bigtriangledown", true, "it", 12.0, "it", Metrics::new(9.228515625, 9.1875, 9.15625, 0.03125, 9.1875, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\triangledown", true, "it", 12.0, "it", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\blacktriangledown", true, "it", 12.0, "it", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\triangleleft", true, "it", 12.0, "it", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\blacktriangleleft", true, "it", 12.0, "it", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\lozenge", true, "it", 12.0, "it", Metrics::new(5.9296875, 12.484375, 5.859375, 0.03125, 5.890625, -2.796875, 9.6875, 9.6875, false)),
    glyph("\\blacksquare", true, "it", 12.0, "it", Metrics::new(11.337890625, 9.1875, 9.15625, 1.09375, 10.25, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\square", true, "it", 12.0, "it", Metrics::new(11.337890625, 9.1875, 9.15625, 1.09375, 10.25, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\Box", true, "it", 12.0, "it", Metrics::new(11.337890625, 9.1875, 9.15625, 1.09375, 10.25, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\bigstar", true, "it", 12.0, "it", Metrics::new(10.7578125, 8.71875, 9.203125, 0.78125, 9.984375, -0.046875, 8.671875, 8.671875, false)),
    glyph("\\diagup", true, "it", 12.0, "it", Metrics::new(7.224609375, 14.015625, 8.265625, -0.515625, 7.75, -2.875, 11.140625, 11.140625, false)),
    glyph("\\diagdown", true, "it", 12.0, "it", Metrics::new(7.224609375, 14.015625, 8.265625, -0.515625, 7.75, -2.875, 11.140625, 11.140625, false)),
    glyph("\\varspadesuit", true, "it", 12.0, "it", Metrics::new(10.7578125, 8.75, 6.984375, 1.890625, 8.875, 0.0, 8.75, 8.75, false)),
    glyph("\\varheartsuit", true, "it", 12.0, "it", Metrics::new(10.7578125, 8.75, 8.640625, 1.0625, 9.703125, 0.0, 8.75, 8.75, false)),
    glyph("\\vardiamondsuit", true, "it", 12.0, "it", Metrics::new(10.7578125, 8.75, 6.71875, 2.015625, 8.734375, 0.0, 8.75, 8.75, false)),
    glyph("\\varclubsuit", true, "it", 12.0, "it", Metrics::new(10.7578125, 8.796875, 8.078125, 1.34375, 9.421875, 0.0, 8.796875, 8.796875, false)),
    glyph("\\checkmark", true, "it", 12.0, "it", Metrics::new(10.0546875, 6.40625, 6.21875, 1.796875, 8.015625, 1.15625, 7.5625, 7.5625, false)),
    glyph("\\maltese", true, "it", 12.0, "it", Metrics::new(10.0546875, 8.75, 8.75, 0.65625, 9.40625, 0.0, 8.75, 8.75, false)),
    glyph("\\sun", true, "it", 12.0, "it", Metrics::new(10.7578125, 8.765625, 8.765625, 1.0, 9.765625, 0.0, 8.765625, 8.765625, false)),
    glyph("\\mercury", true, "it", 12.0, "it", Metrics::new(7.365234375, 10.0, 5.3125, 1.03125, 6.34375, -1.21875, 8.78125, 8.78125, false)),
    glyph("\\venus", true, "it", 12.0, "it", Metrics::new(8.7890625, 10.28125, 6.734375, 1.03125, 7.765625, -1.5, 8.78125, 8.78125, false)),
    glyph("\\earth", true, "it", 12.0, "it", Metrics::new(8.7890625, 10.28125, 6.734375, 1.03125, 7.765625, -0.171875, 10.109375, 10.109375, false)),
    glyph("\\mars", true, "it", 12.0, "it", Metrics::new(10.7578125, 8.8125, 9.015625, 0.953125, 9.96875, -0.171875, 8.640625, 8.640625, false)),
    glyph("\\jupiter", true, "it", 12.0, "it", Metrics::new(10.7578125, 8.765625, 6.78125, 1.984375, 8.765625, 0.0, 8.765625, 8.765625, false)),
    glyph("\\saturn", true, "it", 12.0, "it", Metrics::new(10.7578125, 8.765625, 5.5, 2.625, 8.125, 0.0, 8.765625, 8.765625, false)),
    glyph("\\uranus", true, "it", 12.0, "it", Metrics::new(10.7578125, 8.765625, 7.84375, 1.453125, 9.296875, 0.0, 8.765625, 8.765625, false)),
    glyph("\\neptune", true, "it", 12.0, "it", Metrics::new(10.7578125, 8.765625, 7.703125, 1.53125, 9.234375, 0.0, 8.765625, 8.765625, false)),
    glyph("\\pluto", true, "it", 12.0, "it", Metrics::new(10.7578125, 8.765625, 4.984375, 2.890625, 7.875, 0.0, 8.765625, 8.765625, false)),
    glyph("\\male", true, "it", 12.0, "it", Metrics::new(10.7578125, 8.8125, 9.015625, 0.953125, 9.96875, -0.171875, 8.640625, 8.640625, false)),
    glyph("\\female", true, "it", 12.0, "it", Metrics::new(8.7890625, 10.28125, 6.734375, 1.03125, 7.765625, -1.5, 8.78125, 8.78125, false)),
    glyph("\\circledR", true, "it", 12.0, "it", Metrics::new(12.0, 8.703125, 8.6875, 1.65625, 10.34375, 0.0, 8.703125, 8.703125, false)),
    glyph("\\yen", true, "it", 12.0, "it", Metrics::new(7.634765625, 8.75, 6.65625, 0.484375, 7.140625, 0.0, 8.75, 8.75, false)),
    glyph("\\sterling", true, "it", 12.0, "it", Metrics::new(7.634765625, 8.90625, 5.828125, 0.75, 6.578125, 0.0, 8.90625, 8.90625, false)),
    glyph("\\cent", true, "it", 12.0, "it", Metrics::new(7.634765625, 10.21875, 5.1875, 1.015625, 6.203125, -1.828125, 8.390625, 8.390625, false)),
    glyph("\\backprime", true, "it", 12.0, "it", Metrics::new(2.724609375, 2.1875, 2.203125, 0.234375, 2.4375, 6.5625, 8.75, 8.75, false)),
    glyph("\\dag", true, "it", 12.0, "it", Metrics::new(6.0, 9.90625, 5.34375, 0.328125, 5.671875, -1.15625, 8.75, 8.75, false)),
    glyph("\\ddag", true, "it", 12.0, "it", Metrics::new(6.0, 9.90625, 5.34375, 0.328125, 5.671875, -1.15625, 8.75, 8.75, false)),
    glyph("é", true, "it", 12.0, "it", Metrics::new(7.3828125, 9.765625, 6.375, 0.546875, 6.921875, -0.171875, 9.59375, 9.59375, true)),
    glyph(" ", true, "it", 12.0, "it", Metrics::new(3.814453125, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, false)),
    glyph("a", false, "default", 10.0, "regular", Metrics::new(6.1279296875, 5.734375, 4.625, 0.59375, 5.21875, -0.140625, 5.59375, 5.59375, false)),
    glyph("b", false, "default", 10.0, "regular", Metrics::new(6.34765625, 7.734375, 4.890625, 0.90625, 5.796875, -0.140625, 7.59375, 7.59375, false)),
    glyph("c", false, "default", 10.0, "regular", Metrics::new(5.498046875, 5.734375, 4.328125, 0.546875, 4.875, -0.140625, 5.59375, 5.59375, false)),
    glyph("d", false, "default", 10.0, "regular", Metrics::new(6.34765625, 7.734375, 4.890625, 0.546875, 5.4375, -0.140625, 7.59375, 7.59375, false)),
    glyph("e", false, "default", 10.0, "regular", Metrics::new(6.15234375, 5.734375, 5.078125, 0.546875, 5.625, -0.140625, 5.59375, 5.59375, false)),
    glyph("f", false, "default", 10.0, "regular", Metrics::new(3.5205078125, 7.59375, 3.484375, 0.234375, 3.71875, 0.0, 7.59375, 7.59375, false)),
    glyph("g", false, "default", 10.0, "regular", Metrics::new(6.34765625, 7.671875, 4.890625, 0.546875, 5.4375, -2.078125, 5.59375, 5.59375, false)),
    glyph("h", false, "default", 10.0, "regular", Metrics::new(6.337890625, 7.59375, 4.578125, 0.90625, 5.484375, 0.0, 7.59375, 7.59375, false)),
    glyph("i", false, "default", 10.0, "regular", Metrics::new(2.7783203125, 7.59375, 0.90625, 0.9375, 1.84375, 0.0, 7.59375, 7.59375, false)),
    glyph("j", false, "default", 10.0, "regular", Metrics::new(2.7783203125, 9.671875, 2.03125, -0.1875, 1.84375, -2.078125, 7.59375, 7.59375, false)),
    glyph("k", false, "default", 10.0, "regular", Metrics::new(5.791015625, 7.59375, 4.859375, 0.90625, 5.765625, 0.0, 7.59375, 7.59375, false)),
    glyph("l", false, "default", 10.0, "regular", Metrics::new(2.7783203125, 7.59375, 0.90625, 0.9375, 1.84375, 0.0, 7.59375, 7.59375, false)),
    glyph("m", false, "default", 10.0, "regular", Metrics::new(9.7412109375, 5.59375, 7.984375, 0.90625, 8.890625, 0.0, 5.59375, 5.59375, false)),
    glyph("n", false, "default", 10.0, "regular", Metrics::new(6.337890625, 5.59375, 4.578125, 0.90625, 5.484375, 0.0, 5.59375, 5.59375, false)),
    glyph("o", false, "default", 10.0, "regular", Metrics::new(6.1181640625, 5.734375, 5.03125, 0.546875, 5.578125, -0.140625, 5.59375, 5.59375, false)),
    glyph("p", false, "default", 10.0, "regular", Metrics::new(6.34765625, 7.671875, 4.890625, 0.90625, 5.796875, -2.078125, 5.59375, 5.59375, false)),
    glyph("q", false, "default", 10.0, "regular", Metrics::new(6.34765625, 7.671875, 4.890625, 0.546875, 5.4375, -2.078125, 5.59375, 5.59375, false)),
    glyph("r", false, "default", 10.0, "regular", Metrics::new(4.111328125, 5.59375, 3.203125, 0.90625, 4.109375, 0.0, 5.59375, 5.59375, false)),
    glyph("s", false, "default", 10.0, "regular", Metrics::new(5.2099609375, 5.734375, 4.171875, 0.546875, 4.71875, -0.140625, 5.59375, 5.59375, false)),
    glyph("t", false, "default", 10.0, "regular", Metrics::new(3.9208984375, 7.015625, 3.421875, 0.265625, 3.6875, 0.0, 7.015625, 7.015625, false)),
    glyph("u", false, "default", 10.0, "regular", Metrics::new(6.337890625, 5.734375, 4.59375, 0.84375, 5.4375, -0.140625, 5.59375, 5.59375, false)),
    glyph("v", false, "default", 10.0, "regular", Metrics::new(5.91796875, 5.46875, 5.328125, 0.296875, 5.625, 0.0, 5.46875, 5.46875, false)),
    glyph("w", false, "default", 10.0, "regular", Metrics::new(8.1787109375, 5.46875, 7.34375, 0.421875, 7.765625, 0.0, 5.46875, 5.46875, false)),
    glyph("x", false, "default", 10.0, "regular", Metrics::new(5.91796875, 5.46875, 5.3125, 0.28125, 5.59375, 0.0, 5.46875, 5.46875, false)),
    glyph("y", false, "default", 10.0, "regular", Metrics::new(5.91796875, 7.546875, 5.328125, 0.296875, 5.625, -2.078125, 5.46875, 5.46875, false)),
    glyph("z", false, "default", 10.0, "regular", Metrics::new(5.2490234375, 5.46875, 4.375, 0.4375, 4.8125, 0.0, 5.46875, 5.46875, false)),
    glyph("A", false, "default", 10.0, "regular", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("B", false, "default", 10.0, "regular", Metrics::new(6.8603515625, 7.296875, 5.171875, 0.984375, 6.15625, 0.0, 7.296875, 7.296875, false)),
    glyph("C", false, "default", 10.0, "regular", Metrics::new(6.982421875, 7.5625, 5.875, 0.5625, 6.4375, -0.140625, 7.421875, 7.421875, false)),
    glyph("D", false, "default", 10.0, "regular", Metrics::new(7.7001953125, 7.296875, 6.125, 0.984375, 7.109375, 0.0, 7.296875, 7.296875, false)),
    glyph("E", false, "default", 10.0, "regular", Metrics::new(6.318359375, 7.296875, 4.6875, 0.984375, 5.671875, 0.0, 7.296875, 7.296875, false)),
    glyph("F", false, "default", 10.0, "regular", Metrics::new(5.751953125, 7.296875, 4.1875, 0.984375, 5.171875, 0.0, 7.296875, 7.296875, false)),
    glyph("G", false, "default", 10.0, "regular", Metrics::new(7.7490234375, 7.5625, 6.359375, 0.5625, 6.921875, -0.140625, 7.421875, 7.421875, false)),
    glyph("H", false, "default", 10.0, "regular", Metrics::new(7.51953125, 7.296875, 5.546875, 0.984375, 6.53125, 0.0, 7.296875, 7.296875, false)),
    glyph("I", false, "default", 10.0, "regular", Metrics::new(2.94921875, 7.296875, 0.984375, 0.984375, 1.96875, 0.0, 7.296875, 7.296875, false)),
    glyph("J", false, "default", 10.0, "regular", Metrics::new(2.94921875, 9.296875, 2.484375, -0.515625, 1.96875, -2.0, 7.296875, 7.296875, false)),
    glyph("K", false, "default", 10.0, "regular", Metrics::new(6.5576171875, 7.296875, 5.78125, 0.984375, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("L", false, "default", 10.0, "regular", Metrics::new(5.5712890625, 7.296875, 4.53125, 0.984375, 5.515625, 0.0, 7.296875, 7.296875, false)),
    glyph("M", false, "default", 10.0, "regular", Metrics::new(8.6279296875, 7.296875, 6.671875, 0.984375, 7.65625, 0.0, 7.296875, 7.296875, false)),
    glyph("N", false, "default", 10.0, "regular", Metrics::new(7.48046875, 7.296875, 5.515625, 0.984375, 6.5, 0.0, 7.296875, 7.296875, false)),
    glyph("O", false, "default", 10.0, "regular", Metrics::new(7.87109375, 7.5625, 6.75, 0.5625, 7.3125, -0.140625, 7.421875, 7.421875, false)),
    glyph("P", false, "default", 10.0, "regular", Metrics::new(6.0302734375, 7.296875, 4.703125, 0.984375, 5.6875, 0.0, 7.296875, 7.296875, false)),
    glyph("Q", false, "default", 10.0, "regular", Metrics::new(7.87109375, 8.703125, 6.75, 0.5625, 7.3125, -1.28125, 7.421875, 7.421875, false)),
    glyph("R", false, "default", 10.0, "regular", Metrics::new(6.9482421875, 7.296875, 5.671875, 0.984375, 6.65625, 0.0, 7.296875, 7.296875, false)),
    glyph("S", false, "default", 10.0, "regular", Metrics::new(6.34765625, 7.5625, 5.140625, 0.65625, 5.796875, -0.140625, 7.421875, 7.421875, false)),
    glyph("T", false, "default", 10.0, "regular", Metrics::new(6.1083984375, 7.296875, 6.171875, -0.03125, 6.140625, 0.0, 7.296875, 7.296875, false)),
    glyph("U", false, "default", 10.0, "regular", Metrics::new(7.3193359375, 7.4375, 5.578125, 0.875, 6.453125, -0.140625, 7.296875, 7.296875, false)),
    glyph("V", false, "default", 10.0, "regular", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("W", false, "default", 10.0, "regular", Metrics::new(9.8876953125, 7.296875, 9.234375, 0.328125, 9.5625, 0.0, 7.296875, 7.296875, false)),
    glyph("X", false, "default", 10.0, "regular", Metrics::new(6.8505859375, 7.296875, 6.234375, 0.296875, 6.53125, 0.0, 7.296875, 7.296875, false)),
    glyph("Y", false, "default", 10.0, "regular", Metrics::new(6.1083984375, 7.296875, 6.140625, -0.015625, 6.125, 0.0, 7.296875, 7.296875, false)),
    glyph("Z", false, "default", 10.0, "regular", Metrics::new(6.8505859375, 7.296875, 5.953125, 0.453125, 6.40625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\alpha", false, "default", 10.0, "regular", Metrics::new(6.591796875, 5.71875, 5.5625, 0.546875, 6.109375, -0.125, 5.59375, 5.59375, false)),
    glyph("\\beta", false, "default", 10.0, "regular", Metrics::new(6.3818359375, 9.734375, 4.734375, 0.9375, 5.671875, -2.078125, 7.65625, 7.65625, false)),
    glyph("\\gamma", false, "default", 10.0, "regular", Metrics::new(5.91796875, 7.546875, 5.46875, 0.15625, 5.625, -2.078125, 5.46875, 5.46875, false)),
    glyph("\\delta", false, "default", 10.0, "regular", Metrics::new(6.1181640625, 7.5625, 5.03125, 0.546875, 5.578125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\epsilon", false, "default", 10.0, "regular", Metrics::new(6.15234375, 5.734375, 4.265625, 0.546875, 4.8125, -0.140625, 5.59375, 5.59375, false)),
    glyph("\\varepsilon", false, "default", 10.0, "regular", Metrics::new(5.4052734375, 5.75, 4.078125, 0.65625, 4.734375, -0.140625, 5.609375, 5.609375, false)),
    glyph("\\zeta", false, "default", 10.0, "regular", Metrics::new(5.439453125, 9.6875, 4.453125, 0.515625, 4.96875, -2.09375, 7.59375, 7.59375, false)),
    glyph("\\eta", false, "default", 10.0, "regular", Metrics::new(6.337890625, 7.671875, 4.578125, 0.90625, 5.484375, -2.078125, 5.59375, 5.59375, false)),
    glyph("\\theta", false, "default", 10.0, "regular", Metrics::new(6.1181640625, 7.78125, 5.03125, 0.546875, 5.578125, -0.109375, 7.671875, 7.671875, false)),
    glyph("\\vartheta", false, "default", 10.0, "regular", Metrics::new(6.19140625, 7.78125, 5.03125, 0.546875, 5.578125, -0.109375, 7.671875, 7.671875, false)),
    glyph("\\iota", false, "default", 10.0, "regular", Metrics::new(3.3837890625, 5.46875, 2.21875, 0.8125, 3.03125, 0.0, 5.46875, 5.46875, false)),
    glyph("\\kappa", false, "default", 10.0, "regular", Metrics::new(5.8935546875, 5.46875, 4.71875, 0.9375, 5.65625, 0.0, 5.46875, 5.46875, false)),
    glyph("\\lambda", false, "default", 10.0, "regular", Metrics::new(5.91796875, 7.59375, 5.328125, 0.296875, 5.625, 0.0, 7.59375, 7.59375, false)),
    glyph("\\mu", false, "default", 10.0, "regular", Metrics::new(6.3623046875, 7.546875, 5.28125, 0.84375, 6.125, -2.078125, 5.46875, 5.46875, false)),
    glyph("\\nu", false, "default", 10.0, "regular", Metrics::new(5.5859375, 5.46875, 4.765625, 0.359375, 5.125, 0.0, 5.46875, 5.46875, false)),
    glyph("\\xi", false, "default", 10.0, "regular", Metrics::new(5.576171875, 9.6875, 4.484375, 0.515625, 5.0, -2.09375, 7.59375, 7.59375, false)),
    glyph("\\pi", false, "default", 10.0, "regular", Metrics::new(6.0205078125, 5.65625, 5.390625, 0.359375, 5.75, -0.1875, 5.46875, 5.46875, false)),
    glyph("\\varpi", false, "default", 10.0, "regular", Metrics::new(8.3740234375, 5.609375, 7.71875, 0.3125, 8.03125, -0.140625, 5.46875, 5.46875, false)),
    glyph("\\rho", false, "default", 10.0, "regular", Metrics::new(6.34765625, 7.671875, 4.890625, 0.90625, 5.796875, -2.078125, 5.59375, 5.59375, false)),
    glyph("\\varrho", false, "default", 10.0, "regular", Metrics::new(6.34765625, 7.671875, 4.890625, 0.90625, 5.796875, -2.078125, 5.59375, 5.59375, false)),
    glyph("\\sigma", false, "default", 10.0, "regular", Metrics::new(6.337890625, 5.609375, 5.5, 0.546875, 6.046875, -0.140625, 5.46875, 5.46875, false)),
    glyph("\\varsigma", false, "default", 10.0, "regular", Metrics::new(5.869140625, 7.6875, 4.328125, 0.546875, 4.875, -2.09375, 5.59375, 5.59375, false)),
    glyph("\\tau", false, "default", 10.0, "regular", Metrics::new(6.0205078125, 5.46875, 5.046875, 0.484375, 5.53125, 0.0, 5.46875, 5.46875, false)),
    glyph("\\upsilon", false, "default", 10.0, "regular", Metrics::new(5.7861328125, 5.609375, 4.46875, 0.734375, 5.203125, -0.140625, 5.46875, 5.46875, false)),
    glyph("\\phi", false, "default", 10.0, "regular", Metrics::new(6.5966796875, 9.671875, 5.46875, 0.546875, 6.015625, -2.078125, 7.59375, 7.59375, false)),
    glyph("\\varphi", false, "default", 10.0, "regular", Metrics::new(6.5966796875, 7.59375, 5.46875, 0.546875, 6.015625, -2.078125, 5.515625, 5.515625, false)),
    glyph("\\chi", false, "default", 10.0, "regular", Metrics::new(5.7763671875, 7.546875, 5.203125, 0.28125, 5.484375, -2.078125, 5.46875, 5.46875, false)),
    glyph("\\psi", false, "default", 10.0, "regular", Metrics::new(6.5966796875, 7.546875, 5.46875, 0.546875, 6.015625, -2.078125, 5.46875, 5.46875, false)),
    glyph("\\omega", false, "default", 10.0, "regular", Metrics::new(8.3740234375, 5.609375, 7.03125, 0.65625, 7.6875, -0.140625, 5.46875, 5.46875, false)),
    glyph("\\Gamma", false, "default", 10.0, "regular", Metrics::new(5.5712890625, 7.296875, 4.53125, 0.984375, 5.515625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Delta", false, "default", 10.0, "regular", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Theta", false, "default", 10.0, "regular", Metrics::new(7.87109375, 7.5625, 6.75, 0.5625, 7.3125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\Lambda", false, "default", 10.0, "regular", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Xi", false, "default", 10.0, "regular", Metrics::new(6.318359375, 7.296875, 4.5, 0.984375, 5.484375, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Pi", false, "default", 10.0, "regular", Metrics::new(7.51953125, 7.296875, 5.546875, 0.984375, 6.53125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Sigma", false, "default", 10.0, "regular", Metrics::new(6.318359375, 7.296875, 4.6875, 0.984375, 5.671875, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Upsilon", false, "default", 10.0, "regular", Metrics::new(6.1083984375, 7.296875, 6.140625, -0.015625, 6.125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Phi", false, "default", 10.0, "regular", Metrics::new(7.87109375, 7.296875, 6.75, 0.5625, 7.3125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Psi", false, "default", 10.0, "regular", Metrics::new(7.87109375, 7.296875, 6.75, 0.5625, 7.3125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Omega", false, "default", 10.0, "regular", Metrics::new(7.6416015625, 7.375, 6.890625, 0.375, 7.265625, 0.0, 7.375, 7.375, false)),
    glyph("\\sum", false, "default", 10.0, "regular", Metrics::new(6.73828125, 9.109375, 6.40625, 0.125, 6.53125, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\prod", false, "default", 10.0, "regular", Metrics::new(7.568359375, 9.109375, 6.03125, 0.765625, 6.796875, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\coprod", false, "default", 10.0, "regular", Metrics::new(7.568359375, 9.109375, 6.03125, 0.765625, 6.796875, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\int", false, "default", 10.0, "regular", Metrics::new(5.2099609375, 9.6875, 4.0625, 0.578125, 4.640625, -2.125, 7.5625, 7.5625, true)),
    glyph("\\oint", false, "default", 10.0, "regular", Metrics::new(5.2099609375, 9.6875, 4.0625, 0.578125, 4.640625, -2.125, 7.5625, 7.5625, true)),
    glyph("\\iint", false, "default", 10.0, "regular", Metrics::new(7.890625, 9.6875, 6.734375, 0.578125, 7.3125, -2.125, 7.5625, 7.5625, false)),
    glyph("\\iiint", false, "default", 10.0, "regular", Metrics::new(10.5712890625, 9.6875, 9.421875, 0.578125, 10.0, -2.125, 7.5625, 7.5625, false)),
    glyph("\\bigcap", false, "default", 10.0, "regular", Metrics::new(8.203125, 9.109375, 6.828125, 0.6875, 7.515625, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\bigcup", false, "default", 10.0, "regular", Metrics::new(8.203125, 9.109375, 6.828125, 0.6875, 7.515625, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\bigvee", false, "default", 10.0, "regular", Metrics::new(8.203125, 9.109375, 8.265625, -0.03125, 8.234375, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\bigwedge", false, "default", 10.0, "regular", Metrics::new(8.203125, 9.109375, 8.265625, -0.03125, 8.234375, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\bigoplus", false, "default", 10.0, "regular", Metrics::new(10.0, 9.453125, 9.4375, 0.28125, 9.71875, -1.984375, 7.46875, 7.46875, false)),
    glyph("\\bigotimes", false, "default", 10.0, "regular", Metrics::new(10.0, 9.453125, 9.4375, 0.28125, 9.71875, -1.984375, 7.46875, 7.46875, false)),
    glyph("\\pm", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.265625, 6.25, 1.0625, 7.3125, 0.0, 6.265625, 6.265625, false)),
    glyph("\\mp", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.265625, 6.25, 1.0625, 7.3125, 0.0, 6.265625, 6.265625, false)),
    glyph("\\times", false, "default", 10.0, "regular", Metrics::new(8.37890625, 5.65625, 5.640625, 1.375, 7.015625, 0.3125, 5.96875, 5.96875, false)),
    glyph("\\div", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.8125, 6.25, 1.0625, 7.3125, 0.734375, 5.546875, 5.546875, false)),
    glyph("\\cdot", false, "default", 10.0, "regular", Metrics::new(3.1787109375, 1.234375, 1.03125, 1.0625, 2.09375, 2.859375, 4.09375, 4.09375, false)),
    glyph("\\ast", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.265625, 5.828125, 1.28125, 7.109375, 0.0, 6.265625, 6.265625, false)),
    glyph("\\star", false, "default", 10.0, "regular", Metrics::new(6.259765625, 3.640625, 3.828125, 1.21875, 5.046875, 1.484375, 5.125, 5.125, false)),
    glyph("\\circ", false, "default", 10.0, "regular", Metrics::new(6.259765625, 3.109375, 3.09375, 1.578125, 4.671875, 1.59375, 4.703125, 4.703125, false)),
    glyph("\\bullet", false, "default", 10.0, "regular", Metrics::new(6.259765625, 2.890625, 2.890625, 1.6875, 4.578125, 1.6875, 4.578125, 4.578125, false)),
    glyph("\\cap", false, "default", 10.0, "regular", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\cup", false, "default", 10.0, "regular", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\uplus", false, "default", 10.0, "regular", Metrics::new(7.3193359375, 5.78125, 4.734375, 1.296875, 6.03125, 0.03125, 5.8125, 5.8125, false)),
    glyph("\\sqcap", false, "default", 10.0, "regular", Metrics::new(7.802734375, 6.265625, 5.6875, 1.0625, 6.75, 0.0, 6.265625, 6.265625, false)),
    glyph("\\sqcup", false, "default", 10.0, "regular", Metrics::new(7.802734375, 6.265625, 5.6875, 1.0625, 6.75, 0.0, 6.265625, 6.265625, false)),
    glyph("\\vee", false, "default", 10.0, "regular", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\wedge", false, "default", 10.0, "regular", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\setminus", false, "default", 10.0, "regular", Metrics::new(6.3671875, 8.21875, 3.375, 1.921875, 5.296875, -0.53125, 7.6875, 7.6875, false)),
    glyph("\\wr", false, "default", 10.0, "regular", Metrics::new(3.75, 6.265625, 1.71875, 1.015625, 2.734375, 0.0, 6.265625, 6.265625, false)),
    glyph("\\diamond", false, "default", 10.0, "regular", Metrics::new(6.259765625, 4.984375, 4.984375, 0.640625, 5.625, 0.640625, 5.625, 5.625, false)),
    glyph("\\oplus", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\ominus", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\otimes", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\oslash", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\odot", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\bigcirc", false, "default", 10.0, "regular", Metrics::new(8.7255859375, 7.703125, 7.625, 0.546875, 8.171875, -1.25, 6.453125, 6.453125, false)),
    glyph("\\dagger", false, "default", 10.0, "regular", Metrics::new(5.0, 8.265625, 4.4375, 0.28125, 4.71875, -0.96875, 7.296875, 7.296875, false)),
    glyph("\\ddagger", false, "default", 10.0, "regular", Metrics::new(5.0, 8.265625, 4.4375, 0.28125, 4.71875, -0.96875, 7.296875, 7.296875, false)),
    glyph("\\leq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 5.828125, 6.25, 1.0625, 7.3125, 0.0, 5.828125, 5.828125, false)),
    glyph("\\geq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 5.828125, 6.25, 1.0625, 7.3125, 0.0, 5.828125, 5.828125, false)),
    glyph("\\neq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 5.890625, 6.25, 1.0625, 7.3125, 0.1875, 6.078125, 6.078125, false)),
    glyph("\\equiv", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.46875, 6.25, 1.0625, 7.3125, 0.90625, 5.375, 5.375, false)),
    glyph("\\sim", false, "default", 10.0, "regular", Metrics::new(8.37890625, 1.71875, 6.25, 1.0625, 7.3125, 2.28125, 4.0, 4.0, false)),
    glyph("\\simeq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 3.21875, 6.25, 1.0625, 7.3125, 1.71875, 4.9375, 4.9375, false)),
    glyph("\\approx", false, "default", 10.0, "regular", Metrics::new(8.37890625, 3.609375, 6.25, 1.0625, 7.3125, 1.328125, 4.9375, 4.9375, false)),
    glyph("\\cong", false, "default", 10.0, "regular", Metrics::new(8.37890625, 5.03125, 6.25, 1.0625, 7.3125, 0.90625, 5.9375, 5.9375, false)),
    glyph("\\propto", false, "default", 10.0, "regular", Metrics::new(7.1435546875, 3.75, 4.984375, 1.078125, 6.0625, 1.125, 4.875, 4.875, false)),
    glyph("\\subset", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.671875, 6.390625, 1.0, 7.390625, 0.796875, 5.46875, 5.46875, false)),
    glyph("\\supset", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.671875, 6.390625, 1.0, 7.390625, 0.796875, 5.46875, 5.46875, false)),
    glyph("\\subseteq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.140625, 6.390625, 0.921875, 7.3125, 0.0, 6.140625, 6.140625, false)),
    glyph("\\supseteq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.140625, 6.390625, 1.0625, 7.453125, 0.0, 6.140625, 6.140625, false)),
    glyph("\\in", false, "default", 10.0, "regular", Metrics::new(8.7109375, 7.1875, 7.0, 0.859375, 7.859375, -0.09375, 7.09375, 7.09375, false)),
    glyph("\\ni", false, "default", 10.0, "regular", Metrics::new(8.7109375, 7.1875, 7.0, 0.859375, 7.859375, -0.09375, 7.09375, 7.09375, false)),
    glyph("\\notin", false, "default", 10.0, "regular", Metrics::new(8.7109375, 9.734375, 7.0, 0.859375, 7.859375, -1.375, 8.359375, 8.359375, false)),
    glyph("\\ll", false, "default", 10.0, "regular", Metrics::new(10.46875, 5.875, 9.03125, 0.71875, 9.75, 0.21875, 6.09375, 6.09375, false)),
    glyph("\\gg", false, "default", 10.0, "regular", Metrics::new(10.46875, 5.875, 9.03125, 0.71875, 9.75, 0.21875, 6.09375, 6.09375, false)),
    glyph("\\prec", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.015625, 6.25, 1.0625, 7.3125, -0.375, 6.640625, 6.640625, false)),
    glyph("\\succ", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.015625, 6.25, 1.0625, 7.3125, -0.375, 6.640625, 6.640625, false)),
    glyph("\\mid", false, "default", 10.0, "regular", Metrics::new(5.0, 9.84375, 0.78125, 2.109375, 2.890625, -2.140625, 7.703125, 7.703125, false)),
    glyph("\\parallel", false, "default", 10.0, "regular", Metrics::new(5.0, 9.84375, 2.34375, 1.328125, 3.671875, -2.140625, 7.703125, 7.703125, false)),
    glyph("\\vdash", false, "default", 10.0, "regular", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\dashv", false, "default", 10.0, "regular", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\models", false, "default", 10.0, "regular", Metrics::new(5.205078125, 7.0, 3.5, 0.859375, 4.359375, 0.0, 7.0, 7.0, false)),
    glyph("\\asymp", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.15625, 6.25, 1.0625, 7.3125, 1.046875, 5.203125, 5.203125, false)),
    glyph("\\doteq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.53125, 6.25, 1.0625, 7.3125, 1.71875, 6.25, 6.25, false)),
    glyph("\\bowtie", false, "default", 10.0, "regular", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\leftarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\rightarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\uparrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.328125, 4.28125, 2.046875, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\downarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.328125, 4.28125, 2.046875, 6.328125, -0.03125, 7.296875, 7.296875, false)),
    glyph("\\leftrightarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.40625, 0.484375, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\updownarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.40625, 4.28125, 2.046875, 6.328125, -0.078125, 7.328125, 7.328125, false)),
    glyph("\\Leftarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Rightarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Uparrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.328125, 4.265625, 2.0625, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\Downarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.328125, 4.265625, 2.0625, 6.328125, -0.03125, 7.296875, 7.296875, false)),
    glyph("\\Leftrightarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.40625, 0.484375, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Updownarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.40625, 4.28125, 2.046875, 6.328125, -0.078125, 7.328125, 7.328125, false)),
    glyph("\\mapsto", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\longleftarrow", false, "default", 10.0, "regular", Metrics::new(14.3359375, 4.28125, 13.28125, 0.484375, 13.765625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\longrightarrow", false, "default", 10.0, "regular", Metrics::new(14.3359375, 4.28125, 13.265625, 0.578125, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\hookleftarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.65625, 7.3125, 0.484375, 7.796875, 1.0, 5.65625, 5.65625, false)),
    glyph("\\hookrightarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.65625, 7.3125, 0.578125, 7.890625, 1.0, 5.65625, 5.65625, false)),
    glyph("\\nearrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 5.625, 5.625, 1.40625, 7.03125, 0.25, 5.875, 5.875, false)),
    glyph("\\searrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 5.625, 5.625, 1.40625, 7.03125, 0.25, 5.875, 5.875, false)),
    glyph("\\swarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 5.625, 5.625, 1.40625, 7.03125, 0.25, 5.875, 5.875, false)),
    glyph("\\nwarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 5.625, 5.625, 1.40625, 7.03125, 0.25, 5.875, 5.875, false)),
    glyph("\\leftharpoonup", false, "default", 10.0, "regular", Metrics::new(8.37890625, 2.5625, 7.328125, 0.484375, 7.8125, 2.71875, 5.28125, 5.28125, false)),
    glyph("\\rightharpoonup", false, "default", 10.0, "regular", Metrics::new(8.37890625, 2.5625, 7.3125, 0.578125, 7.890625, 2.71875, 5.28125, 5.28125, false)),
    glyph("\\rightleftharpoons", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.140625, 7.40625, 0.484375, 7.890625, 0.0625, 6.203125, 6.203125, false)),
    glyph("\\infty", false, "default", 10.0, "regular", Metrics::new(8.330078125, 3.75, 6.171875, 1.078125, 7.25, 1.125, 4.875, 4.875, false)),
    glyph("\\partial", false, "default", 10.0, "regular", Metrics::new(5.1708984375, 6.765625, 4.234375, 0.46875, 4.703125, -0.140625, 6.625, 6.625, false)),
    glyph("\\nabla", false, "default", 10.0, "regular", Metrics::new(6.689453125, 7.1875, 6.75, -0.03125, 6.71875, 0.0, 7.1875, 7.1875, false)),
    glyph("\\forall", false, "default", 10.0, "regular", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\exists", false, "default", 10.0, "regular", Metrics::new(6.318359375, 7.296875, 4.6875, 0.984375, 5.671875, 0.0, 7.296875, 7.296875, false)),
    glyph("\\neg", false, "default", 10.0, "regular", Metrics::new(8.37890625, 2.796875, 6.25, 1.0625, 7.3125, 1.40625, 4.203125, 4.203125, false)),
    glyph("\\emptyset", false, "default", 10.0, "regular", Metrics::new(8.7109375, 7.1875, 7.203125, 0.75, 7.953125, -0.09375, 7.09375, 7.09375, false)),
    glyph("\\aleph", false, "default", 10.0, "regular", Metrics::new(7.451171875, 7.5625, 6.625, 0.5, 7.125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\hbar", false, "default", 10.0, "regular", Metrics::new(6.9482421875, 7.59375, 5.1875, 0.59375, 5.78125, 0.0, 7.59375, 7.59375, false)),
    glyph("\\ell", false, "default", 10.0, "regular", Metrics::new(4.130859375, 7.5625, 3.671875, -0.140625, 3.53125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\wp", false, "default", 10.0, "regular", Metrics::new(6.97265625, 7.171875, 6.046875, 0.53125, 6.578125, -2.21875, 4.953125, 4.953125, false)),
    glyph("\\Re", false, "default", 10.0, "regular", Metrics::new(8.1396484375, 7.5625, 7.625, 0.40625, 8.03125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\Im", false, "default", 10.0, "regular", Metrics::new(6.97265625, 7.5625, 6.078125, 0.515625, 6.59375, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\prime", false, "default", 10.0, "regular", Metrics::new(2.2705078125, 1.828125, 1.828125, 0.203125, 2.03125, 5.46875, 7.296875, 7.296875, false)),
    glyph("\\angle", false, "default", 10.0, "regular", Metrics::new(8.96484375, 7.296875, 7.0, 0.859375, 7.859375, 0.0, 7.296875, 7.296875, false)),
    glyph("\\triangle", false, "default", 10.0, "regular", Metrics::new(7.6904296875, 7.65625, 7.625, 0.03125, 7.65625, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\surd", false, "default", 10.0, "regular", Metrics::new(6.3720703125, 8.3125, 6.078125, 0.296875, 6.375, -0.203125, 8.109375, 8.109375, false)),
    glyph("\\top", false, "default", 10.0, "regular", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\bot", false, "default", 10.0, "regular", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\flat", false, "default", 10.0, "regular", Metrics::new(4.716796875, 7.34375, 3.03125, 0.890625, 3.921875, -0.03125, 7.3125, 7.3125, false)),
    glyph("\\natural", false, "default", 10.0, "regular", Metrics::new(3.57421875, 7.3125, 1.890625, 0.84375, 2.734375, 0.0, 7.3125, 7.3125, false)),
    glyph("\\sharp", false, "default", 10.0, "regular", Metrics::new(4.8388671875, 7.3125, 3.15625, 0.84375, 4.0, 0.0, 7.3125, 7.3125, false)),
    glyph("\\clubsuit", false, "default", 10.0, "regular", Metrics::new(8.96484375, 7.28125, 6.734375, 1.109375, 7.84375, 0.0, 7.28125, 7.28125, false)),
    glyph("\\diamondsuit", false, "default", 10.0, "regular", Metrics::new(8.96484375, 7.28125, 5.59375, 1.6875, 7.28125, 0.0, 7.28125, 7.28125, false)),
    glyph("\\heartsuit", false, "default", 10.0, "regular", Metrics::new(8.96484375, 7.265625, 7.15625, 0.90625, 8.0625, 0.0, 7.265625, 7.265625, false)),
    glyph("\\spadesuit", false, "default", 10.0, "regular", Metrics::new(8.96484375, 7.28125, 5.8125, 1.578125, 7.390625, 0.0, 7.28125, 7.28125, false)),
    glyph("\\ldots", false, "default", 10.0, "regular", Metrics::new(10.0, 1.234375, 7.6875, 1.15625, 8.84375, 0.0, 1.234375, 1.234375, false)),
    glyph("\\cdots", false, "default", 10.0, "regular", Metrics::new(10.0, 1.25, 7.6875, 1.15625, 8.84375, 2.484375, 3.734375, 3.734375, false)),
    glyph("\\vdots", false, "default", 10.0, "regular", Metrics::new(10.0, 8.078125, 1.03125, 4.484375, 5.515625, -0.921875, 7.15625, 7.15625, false)),
    glyph("\\ddots", false, "default", 10.0, "regular", Metrics::new(10.0, 8.078125, 7.6875, 1.15625, 8.84375, -0.921875, 7.15625, 7.15625, false)),
    glyph("\\langle", false, "default", 10.0, "regular", Metrics::new(3.9013671875, 8.90625, 2.203125, 0.890625, 3.09375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rangle", false, "default", 10.0, "regular", Metrics::new(3.9013671875, 8.90625, 2.21875, 0.796875, 3.015625, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\lfloor", false, "default", 10.0, "regular", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.859375, 2.9375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rfloor", false, "default", 10.0, "regular", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.96875, 3.046875, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\lceil", false, "default", 10.0, "regular", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.859375, 2.9375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rceil", false, "default", 10.0, "regular", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.96875, 3.046875, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\lbrace", false, "default", 10.0, "regular", Metrics::new(6.3623046875, 9.21875, 3.859375, 1.25, 5.109375, -1.625, 7.59375, 7.59375, false)),
    glyph("\\rbrace", false, "default", 10.0, "regular", Metrics::new(6.3623046875, 9.21875, 3.859375, 1.25, 5.109375, -1.625, 7.59375, 7.59375, false)),
    glyph("\\vert", false, "default", 10.0, "regular", Metrics::new(3.369140625, 10.0, 0.828125, 1.265625, 2.09375, -2.359375, 7.640625, 7.640625, false)),
    glyph("\\Vert", false, "default", 10.0, "regular", Metrics::new(5.0, 10.0, 2.453125, 1.265625, 3.71875, -2.359375, 7.640625, 7.640625, false)),
    glyph("\\backslash", false, "default", 10.0, "regular", Metrics::new(3.369140625, 8.21875, 3.375, 0.0, 3.375, -0.921875, 7.296875, 7.296875, false)),
    glyph("\\S", false, "default", 10.0, "regular", Metrics::new(5.0, 8.375, 4.09375, 0.453125, 4.546875, -0.953125, 7.421875, 7.421875, false)),
    glyph("\\P", false, "default", 10.0, "regular", Metrics::new(6.3623046875, 8.265625, 4.515625, 0.765625, 5.28125, -0.96875, 7.296875, 7.296875, false)),
    glyph("\\copyright", false, "default", 10.0, "regular", Metrics::new(10.0, 7.25, 7.25, 1.375, 8.625, 0.0, 7.25, 7.25, false)),
    glyph("\\degree", false, "default", 10.0, "regular", Metrics::new(5.0, 3.09375, 3.09375, 0.953125, 4.046875, 4.328125, 7.421875, 7.421875, false)),
    glyph("\\imath", false, "default", 10.0, "regular", Metrics::new(2.7783203125, 5.59375, 0.90625, 0.9375, 1.84375, 0.0, 5.59375, 5.59375, false)),
    glyph("\\jmath", false, "default", 10.0, "regular", Metrics::new(2.7783203125, 7.546875, 2.03125, -0.1875, 1.84375, -2.078125, 5.46875, 5.46875, false)),
    glyph("\\nleftarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\nrightarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\twoheadleftarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\twoheadrightarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\leftarrowtail", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\rightarrowtail", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\mapsfrom", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\mapsup", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.328125, 4.265625, 2.0625, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\mapsdown", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.328125, 4.265625, 2.0625, 6.328125, -0.03125, 7.296875, 7.296875, false)),
    glyph("\\looparrowleft", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.65625, 7.3125, 0.484375, 7.796875, 1.0, 5.65625, 5.65625, false)),
    glyph("\\looparrowright", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.65625, 7.3125, 0.578125, 7.890625, 1.0, 5.65625, 5.65625, false)),
    glyph("\\leftrightsquigarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.40625, 0.484375, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\nleftrightarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.421875, 7.40625, 0.484375, 7.890625, 0.921875, 5.34375, 5.34375, false)),
    glyph("\\Lsh", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.4375, 4.609375, 1.6875, 6.296875, 0.0, 7.4375, 7.4375, false)),
    glyph("\\Rsh", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.4375, 4.59375, 2.09375, 6.6875, 0.0, 7.4375, 7.4375, false)),
    glyph("\\curvearrowleft", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.65625, 7.78125, 0.21875, 8.0, 2.03125, 6.6875, 6.6875, false)),
    glyph("\\curvearrowright", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.65625, 7.765625, 0.390625, 8.15625, 2.03125, 6.6875, 6.6875, false)),
    glyph("\\circlearrowleft", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.171875, 6.59375, 1.03125, 7.625, 0.625, 6.796875, 6.796875, false)),
    glyph("\\circlearrowright", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.171875, 6.59375, 0.765625, 7.359375, 0.625, 6.796875, 6.796875, false)),
    glyph("\\leftharpoondown", false, "default", 10.0, "regular", Metrics::new(8.37890625, 2.546875, 7.328125, 0.484375, 7.8125, 1.0, 3.546875, 3.546875, false)),
    glyph("\\upharpoonright", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.328125, 2.546875, 3.78125, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\upharpoonleft", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.328125, 2.5625, 2.046875, 4.609375, 0.0, 7.328125, 7.328125, false)),
    glyph("\\rightharpoondown", false, "default", 10.0, "regular", Metrics::new(8.37890625, 2.546875, 7.3125, 0.578125, 7.890625, 1.0, 3.546875, 3.546875, false)),
    glyph("\\downharpoonright", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.328125, 2.546875, 3.78125, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\downharpoonleft", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.328125, 2.5625, 2.046875, 4.609375, 0.0, 7.328125, 7.328125, false)),
    glyph("\\rightleftarrows", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.203125, 7.40625, 0.484375, 7.890625, -0.46875, 6.734375, 6.734375, false)),
    glyph("\\leftrightarrows", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.203125, 7.40625, 0.484375, 7.890625, -0.46875, 6.734375, 6.734375, false)),
    glyph("\\leftleftarrows", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.203125, 7.328125, 0.484375, 7.8125, -0.46875, 6.734375, 6.734375, false)),
    glyph("\\upuparrows", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.328125, 7.203125, 0.59375, 7.796875, 0.0, 7.328125, 7.328125, false)),
    glyph("\\rightrightarrows", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.203125, 7.3125, 0.578125, 7.890625, -0.46875, 6.734375, 6.734375, false)),
    glyph("\\downdownarrows", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.328125, 7.203125, 0.59375, 7.796875, -0.03125, 7.296875, 7.296875, false)),
    glyph("\\leftrightharpoons", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.140625, 7.40625, 0.484375, 7.890625, 0.0625, 6.203125, 6.203125, false)),
    glyph("\\nLeftarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\nLeftrightarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.390625, 7.40625, 0.484375, 7.890625, 0.9375, 5.328125, 5.328125, false)),
    glyph("\\nRightarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Lleftarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Rrightarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\leftsquigarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\rightsquigarrow", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\longleftrightarrow", false, "default", 10.0, "regular", Metrics::new(14.3359375, 4.28125, 13.359375, 0.484375, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Longleftarrow", false, "default", 10.0, "regular", Metrics::new(14.3359375, 4.28125, 13.28125, 0.484375, 13.765625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Longrightarrow", false, "default", 10.0, "regular", Metrics::new(14.3359375, 4.28125, 13.265625, 0.578125, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Longleftrightarrow", false, "default", 10.0, "regular", Metrics::new(14.3359375, 4.28125, 13.359375, 0.484375, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\longmapsto", false, "default", 10.0, "regular", Metrics::new(14.3359375, 4.28125, 13.265625, 0.578125, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\nmid", false, "default", 10.0, "regular", Metrics::new(5.0, 9.84375, 4.0, 0.5, 4.5, -2.140625, 7.703125, 7.703125, false)),
    glyph("\\nparallel", false, "default", 10.0, "regular", Metrics::new(5.0, 9.84375, 4.0, 0.5, 4.5, -2.140625, 7.703125, 7.703125, false)),
    glyph("\\backsim", false, "default", 10.0, "regular", Metrics::new(8.37890625, 1.71875, 6.25, 1.0625, 7.3125, 2.28125, 4.0, 4.0, false)),
    glyph("\\nsim", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.765625, 6.25, 1.0625, 7.3125, 0.765625, 5.53125, 5.53125, false)),
    glyph("\\eqsim", false, "default", 10.0, "regular", Metrics::new(8.37890625, 3.21875, 6.25, 1.0625, 7.3125, 1.328125, 4.546875, 4.546875, false)),
    glyph("\\ncong", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.625, 6.25, 1.0625, 7.3125, -0.046875, 6.578125, 6.578125, false)),
    glyph("\\napprox", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.21875, 6.25, 1.0625, 7.3125, 0.03125, 6.25, 6.25, false)),
    glyph("\\approxeq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 5.078125, 6.25, 1.0625, 7.3125, 0.90625, 5.984375, 5.984375, false)),
    glyph("\\allequal", false, "default", 10.0, "regular", Metrics::new(8.37890625, 5.03125, 6.25, 1.0625, 7.3125, 0.90625, 5.9375, 5.9375, false)),
    glyph("\\Bumpeq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 5.734375, 6.25, 1.0625, 7.3125, 0.265625, 6.0, 6.0, false)),
    glyph("\\bumpeq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 4.28125, 6.25, 1.0625, 7.3125, 1.71875, 6.0, 6.0, false)),
    glyph("\\Doteq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.234375, 6.25, 1.0625, 7.3125, 0.015625, 6.25, 6.25, false)),
    glyph("\\fallingdotseq", false, "default", 10.0, "regular", Metrics::new(8.388671875, 6.21875, 6.265625, 1.0625, 7.328125, 0.03125, 6.25, 6.25, false)),
    glyph("\\risingdotseq", false, "default", 10.0, "regular", Metrics::new(8.388671875, 6.21875, 6.265625, 1.0625, 7.328125, 0.03125, 6.25, 6.25, false)),
    glyph("\\coloneq", false, "default", 10.0, "regular", Metrics::new(10.0, 3.25, 7.984375, 1.015625, 9.0, 1.515625, 4.765625, 4.765625, false)),
    glyph("\\eqcolon", false, "default", 10.0, "regular", Metrics::new(10.0, 3.234375, 8.0, 1.0, 9.0, 1.515625, 4.75, 4.75, false)),
    glyph("\\eqcirc", false, "default", 10.0, "regular", Metrics::new(8.37890625, 2.828125, 6.25, 1.0625, 7.3125, 1.71875, 4.546875, 4.546875, false)),
    glyph("\\circeq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 5.890625, 6.25, 1.0625, 7.3125, 1.71875, 7.609375, 7.609375, false)),
    glyph("\\wedgeq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.40625, 6.25, 1.0625, 7.3125, 1.71875, 8.125, 8.125, false)),
    glyph("\\veeeq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.40625, 6.25, 1.0625, 7.3125, 1.71875, 8.125, 8.125, false)),
    glyph("\\stareq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.765625, 6.25, 1.0625, 7.3125, 1.71875, 8.484375, 8.484375, false)),
    glyph("\\triangleq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.8125, 6.25, 1.0625, 7.3125, 1.71875, 8.53125, 8.53125, false)),
    glyph("\\nequiv", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.75, 6.25, 1.0625, 7.3125, -0.25, 6.5, 6.5, false)),
    glyph("\\leqq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.203125, 6.265625, 1.0625, 7.328125, -0.828125, 6.375, 6.375, false)),
    glyph("\\geqq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.203125, 6.265625, 1.0625, 7.328125, -0.828125, 6.375, 6.375, false)),
    glyph("\\lneqq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 8.015625, 6.265625, 1.0625, 7.328125, -1.640625, 6.375, 6.375, false)),
    glyph("\\gneqq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 8.015625, 6.265625, 1.0625, 7.328125, -1.640625, 6.375, 6.375, false)),
    glyph("\\between", false, "default", 10.0, "regular", Metrics::new(4.638671875, 8.90625, 2.921875, 0.859375, 3.78125, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\nless", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.703125, 6.25, 1.0625, 7.3125, 0.03125, 6.734375, 6.734375, false)),
    glyph("\\ngtr", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.71875, 6.25, 1.0625, 7.3125, -0.46875, 6.25, 6.25, false)),
    glyph("\\nleq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.6875, 6.25, 1.0625, 7.3125, -1.015625, 6.671875, 6.671875, false)),
    glyph("\\ngeq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.6875, 6.25, 1.0625, 7.3125, -1.015625, 6.671875, 6.671875, false)),
    glyph("\\lesssim", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.375, 6.265625, 1.0625, 7.328125, -0.546875, 5.828125, 5.828125, false)),
    glyph("\\gtrsim", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.21875, 6.265625, 1.0625, 7.328125, -0.390625, 5.828125, 5.828125, false)),
    glyph("\\lessgtr", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.734375, 6.3125, 1.015625, 7.328125, -0.875, 6.859375, 6.859375, false)),
    glyph("\\gtrless", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.734375, 6.3125, 1.015625, 7.328125, -0.875, 6.859375, 6.859375, false)),
    glyph("\\preccurlyeq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.71875, 6.25, 1.0625, 7.3125, -1.046875, 6.671875, 6.671875, false)),
    glyph("\\succcurlyeq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.71875, 6.25, 1.0625, 7.3125, -1.046875, 6.671875, 6.671875, false)),
    glyph("\\precsim", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.515625, 6.25, 1.0625, 7.3125, -0.84375, 6.671875, 6.671875, false)),
    glyph("\\succsim", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.515625, 6.25, 1.0625, 7.3125, -0.84375, 6.671875, 6.671875, false)),
    glyph("\\nprec", false, "default", 10.0, "regular", Metrics::new(8.37890625, 8.25, 6.25, 1.0625, 7.3125, -0.609375, 7.640625, 7.640625, false)),
    glyph("\\nsucc", false, "default", 10.0, "regular", Metrics::new(8.37890625, 8.25, 6.25, 1.0625, 7.3125, -1.375, 6.875, 6.875, false)),
    glyph("\\nsubset", false, "default", 10.0, "regular", Metrics::new(8.37890625, 8.234375, 6.390625, 1.0, 7.390625, -0.96875, 7.265625, 7.265625, false)),
    glyph("\\nsupset", false, "default", 10.0, "regular", Metrics::new(8.37890625, 8.21875, 6.390625, 1.0, 7.390625, -1.0, 7.21875, 7.21875, false)),
    glyph("\\nsubseteq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 8.453125, 6.390625, 0.921875, 7.3125, -1.15625, 7.296875, 7.296875, false)),
    glyph("\\nsupseteq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 8.453125, 6.390625, 1.0625, 7.453125, -1.15625, 7.296875, 7.296875, false)),
    glyph("\\subsetneq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.875, 6.390625, 0.921875, 7.3125, -0.734375, 6.140625, 6.140625, false)),
    glyph("\\supsetneq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.875, 6.390625, 0.921875, 7.3125, -0.734375, 6.140625, 6.140625, false)),
    glyph("\\sqsubset", false, "default", 10.0, "regular", Metrics::new(8.37890625, 5.671875, 6.25, 1.0625, 7.3125, 0.0, 5.671875, 5.671875, false)),
    glyph("\\sqsupset", false, "default", 10.0, "regular", Metrics::new(8.37890625, 5.671875, 6.25, 1.0625, 7.3125, 0.0, 5.671875, 5.671875, false)),
    glyph("\\sqsubseteq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.125, 6.25, 1.0625, 7.3125, -0.828125, 6.296875, 6.296875, false)),
    glyph("\\sqsupseteq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.125, 6.25, 1.0625, 7.3125, -0.828125, 6.296875, 6.296875, false)),
    glyph("\\vDash", false, "default", 10.0, "regular", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\Vdash", false, "default", 10.0, "regular", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\Vvdash", false, "default", 10.0, "regular", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\VDash", false, "default", 10.0, "regular", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\nvdash", false, "default", 10.0, "regular", Metrics::new(8.7109375, 7.78125, 7.0, 0.859375, 7.859375, -0.390625, 7.390625, 7.390625, false)),
    glyph("\\nvDash", false, "default", 10.0, "regular", Metrics::new(8.7109375, 7.78125, 7.0, 0.859375, 7.859375, -0.390625, 7.390625, 7.390625, false)),
    glyph("\\nVdash", false, "default", 10.0, "regular", Metrics::new(8.7109375, 7.78125, 7.0, 0.859375, 7.859375, -0.390625, 7.390625, 7.390625, false)),
    glyph("\\nVDash", false, "default", 10.0, "regular", Metrics::new(8.7109375, 7.78125, 7.0, 0.859375, 7.859375, -0.390625, 7.390625, 7.390625, false)),
    glyph("\\vartriangleleft", false, "default", 10.0, "regular", Metrics::new(8.37890625, 5.984375, 6.25, 1.0625, 7.3125, 0.140625, 6.125, 6.125, false)),
    glyph("\\vartriangleright", false, "default", 10.0, "regular", Metrics::new(8.37890625, 5.984375, 6.25, 1.0625, 7.3125, 0.140625, 6.125, 6.125, false)),
    glyph("\\trianglelefteq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.21875, 6.25, 1.0625, 7.3125, -0.484375, 6.734375, 6.734375, false)),
    glyph("\\trianglerighteq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.21875, 6.25, 1.0625, 7.3125, -0.484375, 6.734375, 6.734375, false)),
    glyph("\\multimap", false, "default", 10.0, "regular", Metrics::new(8.37890625, 2.796875, 7.421875, 0.484375, 7.90625, 1.75, 4.546875, 4.546875, false)),
    glyph("\\backsimeq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 3.21875, 6.25, 1.0625, 7.3125, 1.71875, 4.9375, 4.9375, false)),
    glyph("\\Subset", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.328125, 6.390625, 0.921875, 7.3125, -0.03125, 6.296875, 6.296875, false)),
    glyph("\\Supset", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.328125, 6.390625, 1.0625, 7.453125, -0.03125, 6.296875, 6.296875, false)),
    glyph("\\pitchfork", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.296875, 4.671875, 1.859375, 6.53125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\lessdot", false, "default", 10.0, "regular", Metrics::new(8.37890625, 5.359375, 6.25, 1.0625, 7.3125, 0.453125, 5.8125, 5.8125, false)),
    glyph("\\gtrdot", false, "default", 10.0, "regular", Metrics::new(8.37890625, 5.359375, 6.25, 1.0625, 7.3125, 0.453125, 5.8125, 5.8125, false)),
    glyph("\\lll", false, "default", 10.0, "regular", Metrics::new(14.2236328125, 5.875, 12.78125, 0.71875, 13.5, 0.21875, 6.09375, 6.09375, false)),
    glyph("\\ggg", false, "default", 10.0, "regular", Metrics::new(14.2236328125, 5.875, 12.78125, 0.71875, 13.5, 0.21875, 6.09375, 6.09375, false)),
    glyph("\\lesseqgtr", false, "default", 10.0, "regular", Metrics::new(8.37890625, 10.8125, 6.25, 1.0625, 7.3125, -2.28125, 8.53125, 8.53125, false)),
    glyph("\\gtreqless", false, "default", 10.0, "regular", Metrics::new(8.37890625, 10.8125, 6.25, 1.0625, 7.3125, -2.28125, 8.53125, 8.53125, false)),
    glyph("\\curlyeqprec", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.71875, 6.25, 1.0625, 7.3125, -1.046875, 6.671875, 6.671875, false)),
    glyph("\\curlyeqsucc", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.71875, 6.25, 1.0625, 7.3125, -1.046875, 6.671875, 6.671875, false)),
    glyph("\\npreccurlyeq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 9.421875, 6.25, 1.0625, 7.3125, -1.78125, 7.640625, 7.640625, false)),
    glyph("\\nsucccurlyeq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 9.421875, 6.25, 1.0625, 7.3125, -1.78125, 7.640625, 7.640625, false)),
    glyph("\\nsqsubseteq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 9.078125, 6.25, 1.0625, 7.3125, -1.40625, 7.671875, 7.671875, false)),
    glyph("\\nsqsupseteq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 9.078125, 6.25, 1.0625, 7.3125, -1.40625, 7.671875, 7.671875, false)),
    glyph("\\lnsim", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.203125, 6.265625, 1.0625, 7.328125, -1.375, 5.828125, 5.828125, false)),
    glyph("\\gnsim", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.203125, 6.265625, 1.0625, 7.328125, -1.375, 5.828125, 5.828125, false)),
    glyph("\\precnsim", false, "default", 10.0, "regular", Metrics::new(8.37890625, 8.359375, 6.25, 1.0625, 7.3125, -1.6875, 6.671875, 6.671875, false)),
    glyph("\\succnsim", false, "default", 10.0, "regular", Metrics::new(8.37890625, 8.375, 6.265625, 1.09375, 7.359375, -1.703125, 6.671875, 6.671875, false)),
    glyph("\\ntriangleleft", false, "default", 10.0, "regular", Metrics::new(8.37890625, 8.859375, 6.25, 1.0625, 7.3125, -1.296875, 7.5625, 7.5625, false)),
    glyph("\\ntriangleright", false, "default", 10.0, "regular", Metrics::new(8.37890625, 8.859375, 6.25, 1.0625, 7.3125, -1.296875, 7.5625, 7.5625, false)),
    glyph("\\ntrianglelefteq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 10.046875, 6.25, 1.0625, 7.3125, -1.890625, 8.15625, 8.15625, false)),
    glyph("\\ntrianglerighteq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 10.046875, 6.25, 1.046875, 7.296875, -1.890625, 8.15625, 8.15625, false)),
    glyph("\\leqslant", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.046875, 6.25, 1.0625, 7.3125, -1.234375, 5.8125, 5.8125, false)),
    glyph("\\geqslant", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.046875, 6.25, 1.0625, 7.3125, -1.234375, 5.8125, 5.8125, false)),
    glyph("\\lessapprox", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.953125, 6.265625, 1.0625, 7.328125, -1.328125, 6.625, 6.625, false)),
    glyph("\\gtrapprox", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.953125, 6.265625, 1.0625, 7.328125, -1.328125, 6.625, 6.625, false)),
    glyph("\\lneq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.03125, 6.25, 1.0625, 7.3125, -1.203125, 5.828125, 5.828125, false)),
    glyph("\\gneq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.03125, 6.25, 1.0625, 7.3125, -1.203125, 5.828125, 5.828125, false)),
    glyph("\\lnapprox", false, "default", 10.0, "regular", Metrics::new(8.37890625, 8.65625, 6.265625, 1.0625, 7.328125, -2.03125, 6.625, 6.625, false)),
    glyph("\\gnapprox", false, "default", 10.0, "regular", Metrics::new(8.37890625, 8.65625, 6.265625, 1.0625, 7.328125, -2.03125, 6.625, 6.625, false)),
    glyph("\\lesseqqgtr", false, "default", 10.0, "regular", Metrics::new(8.37890625, 11.015625, 6.25, 1.0625, 7.3125, -3.109375, 7.90625, 7.90625, false)),
    glyph("\\gtreqqless", false, "default", 10.0, "regular", Metrics::new(8.37890625, 11.015625, 6.25, 1.0625, 7.3125, -3.109375, 7.90625, 7.90625, false)),
    glyph("\\eqslantless", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.046875, 6.25, 1.0625, 7.3125, -0.609375, 6.4375, 6.4375, false)),
    glyph("\\eqslantgtr", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.046875, 6.25, 1.0625, 7.3125, -0.609375, 6.4375, 6.4375, false)),
    glyph("\\preceq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.90625, 6.25, 1.0625, 7.3125, -0.234375, 6.671875, 6.671875, false)),
    glyph("\\succeq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.90625, 6.25, 1.0625, 7.3125, -0.234375, 6.671875, 6.671875, false)),
    glyph("\\precneqq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 8.5625, 6.25, 1.0625, 7.3125, -1.953125, 6.609375, 6.609375, false)),
    glyph("\\succneqq", false, "default", 10.0, "regular", Metrics::new(8.37890625, 8.5625, 6.25, 1.0625, 7.3125, -1.953125, 6.609375, 6.609375, false)),
    glyph("\\precapprox", false, "default", 10.0, "regular", Metrics::new(8.37890625, 8.828125, 6.25, 1.0625, 7.3125, -1.90625, 6.921875, 6.921875, false)),
    glyph("\\succapprox", false, "default", 10.0, "regular", Metrics::new(8.37890625, 8.828125, 6.25, 1.0625, 7.3125, -1.90625, 6.921875, 6.921875, false)),
    glyph("\\precnapprox", false, "default", 10.0, "regular", Metrics::new(8.37890625, 9.515625, 6.265625, 1.0625, 7.328125, -2.59375, 6.921875, 6.921875, false)),
    glyph("\\succnapprox", false, "default", 10.0, "regular", Metrics::new(8.37890625, 9.515625, 6.265625, 1.0625, 7.328125, -2.59375, 6.921875, 6.921875, false)),
    glyph("\\dotplus", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.296875, 6.25, 1.0625, 7.3125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\smallsetminus", false, "default", 10.0, "regular", Metrics::new(6.3671875, 8.21875, 3.375, 1.921875, 5.296875, -0.53125, 7.6875, 7.6875, false)),
    glyph("\\dotminus", false, "default", 10.0, "regular", Metrics::new(8.37890625, 2.796875, 6.25, 1.0625, 7.3125, 2.71875, 5.515625, 5.515625, false)),
    glyph("\\cupdot", false, "default", 10.0, "regular", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\circledcirc", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\circledast", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\circleddash", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\boxplus", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\boxminus", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\boxtimes", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\boxdot", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\intercal", false, "default", 10.0, "regular", Metrics::new(5.205078125, 7.0, 2.890625, 1.15625, 4.046875, 0.0, 7.0, 7.0, false)),
    glyph("\\veebar", false, "default", 10.0, "regular", Metrics::new(7.3193359375, 7.40625, 5.359375, 0.984375, 6.34375, 0.0, 7.40625, 7.40625, false)),
    glyph("\\barwedge", false, "default", 10.0, "regular", Metrics::new(7.3193359375, 7.40625, 5.359375, 0.984375, 6.34375, 0.0, 7.40625, 7.40625, false)),
    glyph("\\barvee", false, "default", 10.0, "regular", Metrics::new(7.3193359375, 7.40625, 5.359375, 0.984375, 6.34375, 0.0, 7.40625, 7.40625, false)),
    glyph("\\divideontimes", false, "default", 10.0, "regular", Metrics::new(8.37890625, 5.984375, 6.25, 1.0625, 7.3125, 0.140625, 6.125, 6.125, false)),
    glyph("\\ltimes", false, "default", 10.0, "regular", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\rtimes", false, "default", 10.0, "regular", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\leftthreetimes", false, "default", 10.0, "regular", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\rightthreetimes", false, "default", 10.0, "regular", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\curlyvee", false, "default", 10.0, "regular", Metrics::new(7.32421875, 5.796875, 6.359375, 0.484375, 6.84375, 0.0, 5.796875, 5.796875, false)),
    glyph("\\curlywedge", false, "default", 10.0, "regular", Metrics::new(7.32421875, 5.796875, 6.359375, 0.484375, 6.84375, 0.0, 5.796875, 5.796875, false)),
    glyph("\\Cap", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.625, 6.328125, 1.03125, 7.359375, 0.0, 6.625, 6.625, false)),
    glyph("\\Cup", false, "default", 10.0, "regular", Metrics::new(8.37890625, 6.625, 6.328125, 1.03125, 7.359375, -0.140625, 6.484375, 6.484375, false)),
    glyph("\\doublebarwedge", false, "default", 10.0, "regular", Metrics::new(8.37890625, 5.125, 4.28125, 2.046875, 6.328125, 0.0, 5.125, 5.125, false)),
    glyph("\\bigodot", false, "default", 10.0, "regular", Metrics::new(10.0, 9.453125, 9.4375, 0.28125, 9.71875, -1.984375, 7.46875, 7.46875, false)),
    glyph("\\oiint", false, "default", 10.0, "regular", Metrics::new(7.890625, 9.6875, 6.734375, 0.578125, 7.3125, -2.125, 7.5625, 7.5625, false)),
    glyph("\\oiiint", false, "default", 10.0, "regular", Metrics::new(10.5712890625, 9.6875, 9.421875, 0.578125, 10.0, -2.125, 7.5625, 7.5625, false)),
    glyph("\\iiiint", false, "default", 10.0, "regular", Metrics::new(13.251953125, 9.6875, 12.109375, 0.578125, 12.6875, -2.125, 7.5625, 7.5625, false)),
    glyph("\\minus", false, "default", 10.0, "regular", Metrics::new(8.37890625, 0.828125, 6.25, 1.0625, 7.3125, 2.71875, 3.546875, 3.546875, false)),
    glyph("\\cdotp", false, "default", 10.0, "regular", Metrics::new(3.1787109375, 1.234375, 1.03125, 1.0625, 2.09375, 2.859375, 4.09375, 4.09375, false)),
    glyph("\\hslash", false, "default", 10.0, "regular", Metrics::new(6.337890625, 7.59375, 5.4375, 0.4375, 5.875, 0.0, 7.59375, 7.59375, false)),
    glyph("\\beth", false, "default", 10.0, "regular", Metrics::new(6.73828125, 7.5625, 6.5625, -0.03125, 6.53125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\gimel", false, "default", 10.0, "regular", Metrics::new(4.658203125, 7.765625, 3.9375, 0.125, 4.0625, -0.34375, 7.421875, 7.421875, false)),
    glyph("\\daleth", false, "default", 10.0, "regular", Metrics::new(6.4453125, 7.765625, 5.484375, 0.421875, 5.90625, -0.34375, 7.421875, 7.421875, false)),
    glyph("\\mho", false, "default", 10.0, "regular", Metrics::new(7.6416015625, 7.375, 6.890625, 0.375, 7.265625, -0.140625, 7.234375, 7.234375, false)),
    glyph("\\eth", false, "default", 10.0, "regular", Metrics::new(6.1181640625, 7.734375, 5.03125, 0.546875, 5.578125, -0.140625, 7.59375, 7.59375, false)),
    glyph("\\Finv", false, "default", 10.0, "regular", Metrics::new(5.751953125, 7.296875, 4.1875, 0.984375, 5.171875, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Game", false, "default", 10.0, "regular", Metrics::new(7.7490234375, 7.5625, 6.359375, 0.796875, 7.15625, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\digamma", false, "default", 10.0, "regular", Metrics::new(4.5849609375, 9.671875, 5.03125, -0.9375, 4.09375, -2.078125, 7.59375, 7.59375, false)),
    glyph("\\varkappa", false, "default", 10.0, "regular", Metrics::new(6.6357421875, 5.5625, 5.453125, 0.546875, 6.0, -0.0625, 5.5, 5.5, false)),
    glyph("\\backepsilon", false, "default", 10.0, "regular", Metrics::new(6.15234375, 5.734375, 4.25, 0.953125, 5.203125, -0.140625, 5.59375, 5.59375, false)),
    glyph("\\AA", false, "default", 10.0, "regular", Metrics::new(6.8408203125, 9.28125, 6.6875, 0.078125, 6.765625, 0.0, 9.28125, 9.28125, false)),
    glyph("\\ae", false, "default", 10.0, "regular", Metrics::new(9.8193359375, 5.734375, 8.703125, 0.59375, 9.296875, -0.140625, 5.59375, 5.59375, false)),
    glyph("\\AE", false, "default", 10.0, "regular", Metrics::new(9.7412109375, 7.296875, 9.0625, 0.046875, 9.109375, 0.0, 7.296875, 7.296875, false)),
    glyph("\\oe", false, "default", 10.0, "regular", Metrics::new(10.2294921875, 5.734375, 9.15625, 0.546875, 9.703125, -0.140625, 5.59375, 5.59375, false)),
    glyph("\\OE", false, "default", 10.0, "regular", Metrics::new(10.6982421875, 7.296875, 9.5, 0.5625, 10.0625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\o", false, "default", 10.0, "regular", Metrics::new(6.1181640625, 6.375, 5.40625, 0.359375, 5.765625, -0.453125, 5.921875, 5.921875, false)),
    glyph("\\O", false, "default", 10.0, "regular", Metrics::new(7.87109375, 7.953125, 6.875, 0.5, 7.375, -0.34375, 7.609375, 7.609375, false)),
    glyph("\\ss", false, "default", 10.0, "regular", Metrics::new(6.298828125, 7.734375, 4.9375, 0.90625, 5.84375, -0.140625, 7.59375, 7.59375, false)),
    glyph("\\l", false, "default", 10.0, "regular", Metrics::new(2.841796875, 7.59375, 2.84375, 0.015625, 2.859375, 0.0, 7.59375, 7.59375, false)),
    glyph("\\L", false, "default", 10.0, "regular", Metrics::new(5.6201171875, 7.296875, 5.640625, -0.0625, 5.578125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\complement", false, "default", 10.0, "regular", Metrics::new(6.3623046875, 7.5625, 4.875, 0.65625, 5.53125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\nexists", false, "default", 10.0, "regular", Metrics::new(6.318359375, 8.21875, 4.6875, 0.984375, 5.671875, -0.453125, 7.765625, 7.765625, false)),
    glyph("\\varnothing", false, "default", 10.0, "regular", Metrics::new(8.7109375, 7.1875, 7.203125, 0.75, 7.953125, -0.09375, 7.09375, 7.09375, false)),
    glyph("\\smallin", false, "default", 10.0, "regular", Metrics::new(7.177734375, 4.75, 5.0625, 1.0625, 6.125, 0.75, 5.5, 5.5, false)),
    glyph("\\QED", false, "default", 10.0, "regular", Metrics::new(6.3623046875, 4.859375, 3.421875, 1.46875, 4.890625, 0.0, 4.859375, 4.859375, false)),
    glyph("\\measuredangle", false, "default", 10.0, "regular", Metrics::new(8.96484375, 7.828125, 7.0, 0.859375, 7.859375, -0.53125, 7.296875, 7.296875, false)),
    glyph("\\sphericalangle", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.296875, 6.171875, 1.15625, 7.328125, -0.03125, 7.265625, 7.265625, false)),
    glyph("\\rightangle", false, "default", 10.0, "regular", Metrics::new(8.37890625, 5.625, 5.625, 1.375, 7.0, 0.984375, 6.609375, 6.609375, false)),
    glyph("\\therefore", false, "default", 10.0, "regular", Metrics::new(6.3623046875, 5.046875, 5.171875, 0.59375, 5.765625, 1.0, 6.046875, 6.046875, false)),
    glyph("\\because", false, "default", 10.0, "regular", Metrics::new(6.3623046875, 5.046875, 5.171875, 0.59375, 5.765625, 1.0, 6.046875, 6.046875, false)),
    glyph("\\Colon", false, "default", 10.0, "regular", Metrics::new(6.3623046875, 5.046875, 5.171875, 0.59375, 5.765625, 1.0, 6.046875, 6.046875, false)),
    glyph("\\lnot", false, "default", 10.0, "regular", Metrics::new(8.37890625, 2.796875, 6.25, 1.0625, 7.3125, 1.40625, 4.203125, 4.203125, false)),
    glyph("\\sqrt", false, "default", 10.0, "regular", Metrics::new(6.3720703125, 8.3125, 6.078125, 0.296875, 6.375, -0.203125, 8.109375, 8.109375, false)),
    glyph("\\dots", false, "default", 10.0, "regular", Metrics::new(10.0, 1.234375, 7.6875, 1.15625, 8.84375, 0.0, 1.234375, 1.234375, false)),
    glyph("\\adots", false, "default", 10.0, "regular", Metrics::new(10.0, 8.078125, 7.6875, 1.15625, 8.84375, -0.921875, 7.15625, 7.15625, false)),
    glyph("\\ulcorner", false, "default", 10.0, "regular", Metrics::new(4.6875, 3.34375, 3.171875, 0.859375, 4.03125, 4.25, 7.59375, 7.59375, false)),
    glyph("\\urcorner", false, "default", 10.0, "regular", Metrics::new(4.6875, 3.34375, 3.171875, 0.65625, 3.828125, 4.25, 7.59375, 7.59375, false)),
    glyph("\\llcorner", false, "default", 10.0, "regular", Metrics::new(4.6875, 3.34375, 3.171875, 0.859375, 4.03125, -0.703125, 2.640625, 2.640625, false)),
    glyph("\\lrcorner", false, "default", 10.0, "regular", Metrics::new(4.6875, 3.34375, 3.171875, 0.65625, 3.828125, -0.703125, 2.640625, 2.640625, false)),
    glyph("\\lbrack", false, "default", 10.0, "regular", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.859375, 2.9375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rbrack", false, "default", 10.0, "regular", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.96875, 3.046875, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\leftparen", false, "default", 10.0, "regular", Metrics::new(3.9013671875, 8.90625, 2.234375, 0.859375, 3.09375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rightparen", false, "default", 10.0, "regular", Metrics::new(3.9013671875, 8.90625, 2.25, 0.796875, 3.046875, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\bigtriangleup", false, "default", 10.0, "regular", Metrics::new(7.6904296875, 7.65625, 7.625, 0.03125, 7.65625, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\vartriangle", false, "default", 10.0, "regular", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\blacktriangle", false, "default", 10.0, "regular", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\triangleright", false, "default", 10.0, "regular", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\blacktriangleright", false, "default", 10.0, "regular", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\bigtriangledown", false, "default", 10.0, "regular", Metrics::new(7.6904296875, 7.65625, 7.625, 0.03125, 7.65625, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\triangledown", false, "default", 10.0, "regular", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\blacktriangledown", false, "default", 10.0, "regular", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\triangleleft", false, "default", 10.0, "regular", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\blacktriangleleft", false, "default", 10.0, "regular", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\lozenge", false, "default", 10.0, "regular", Metrics::new(4.94140625, 10.40625, 4.875, 0.03125, 4.90625, -2.328125, 8.078125, 8.078125, false)),
    glyph("\\blacksquare", false, "default", 10.0, "regular", Metrics::new(9.4482421875, 7.65625, 7.640625, 0.90625, 8.546875, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\square", false, "default", 10.0, "regular", Metrics::new(9.4482421875, 7.65625, 7.640625, 0.90625, 8.546875, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\Box", false, "default", 10.0, "regular", Metrics::new(9.4482421875, 7.65625, 7.640625, 0.90625, 8.546875, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\bigstar", false, "default", 10.0, "regular", Metrics::new(8.96484375, 7.28125, 7.65625, 0.65625, 8.3125, -0.046875, 7.234375, 7.234375, false)),
    glyph("\\diagup", false, "default", 10.0, "regular", Metrics::new(6.0205078125, 11.6875, 6.890625, -0.4375, 6.453125, -2.40625, 9.28125, 9.28125, false)),
    glyph("\\diagdown", false, "default", 10.0, "regular", Metrics::new(6.0205078125, 11.6875, 6.890625, -0.4375, 6.453125, -2.40625, 9.28125, 9.28125, false)),
    glyph("\\varspadesuit", false, "default", 10.0, "regular", Metrics::new(8.96484375, 7.296875, 5.8125, 1.578125, 7.390625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\varheartsuit", false, "default", 10.0, "regular", Metrics::new(8.96484375, 7.28125, 7.1875, 0.890625, 8.078125, 0.0, 7.28125, 7.28125, false)),
    glyph("\\vardiamondsuit", false, "default", 10.0, "regular", Metrics::new(8.96484375, 7.28125, 5.59375, 1.6875, 7.28125, 0.0, 7.28125, 7.28125, false)),
    glyph("\\varclubsuit", false, "default", 10.0, "regular", Metrics::new(8.96484375, 7.328125, 6.75, 1.109375, 7.859375, 0.0, 7.328125, 7.328125, false)),
    glyph("\\checkmark", false, "default", 10.0, "regular", Metrics::new(8.37890625, 5.328125, 5.171875, 1.5, 6.671875, 0.96875, 6.296875, 6.296875, false)),
    glyph("\\maltese", false, "default", 10.0, "regular", Metrics::new(8.37890625, 7.296875, 7.28125, 0.546875, 7.828125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\sun", false, "default", 10.0, "regular", Metrics::new(8.96484375, 7.3125, 7.3125, 0.828125, 8.140625, 0.0, 7.3125, 7.3125, false)),
    glyph("\\mercury", false, "default", 10.0, "regular", Metrics::new(6.1376953125, 8.328125, 4.421875, 0.859375, 5.28125, -1.015625, 7.3125, 7.3125, false)),
    glyph("\\venus", false, "default", 10.0, "regular", Metrics::new(7.32421875, 8.5625, 5.609375, 0.859375, 6.46875, -1.25, 7.3125, 7.3125, false)),
    glyph("\\earth", false, "default", 10.0, "regular", Metrics::new(7.32421875, 8.5625, 5.609375, 0.859375, 6.46875, -0.140625, 8.421875, 8.421875, false)),
    glyph("\\mars", false, "default", 10.0, "regular", Metrics::new(8.96484375, 7.34375, 7.515625, 0.796875, 8.3125, -0.140625, 7.203125, 7.203125, false)),
    glyph("\\jupiter", false, "default", 10.0, "regular", Metrics::new(8.96484375, 7.3125, 5.640625, 1.65625, 7.296875, 0.0, 7.3125, 7.3125, false)),
    glyph("\\saturn", false, "default", 10.0, "regular", Metrics::new(8.96484375, 7.3125, 4.578125, 2.1875, 6.765625, 0.0, 7.3125, 7.3125, false)),
    glyph("\\uranus", false, "default", 10.0, "regular", Metrics::new(8.96484375, 7.3125, 6.53125, 1.21875, 7.75, 0.0, 7.3125, 7.3125, false)),
    glyph("\\neptune", false, "default", 10.0, "regular", Metrics::new(8.96484375, 7.3125, 6.421875, 1.265625, 7.6875, 0.0, 7.3125, 7.3125, false)),
    glyph("\\pluto", false, "default", 10.0, "regular", Metrics::new(8.96484375, 7.3125, 4.15625, 2.40625, 6.5625, 0.0, 7.3125, 7.3125, false)),
    glyph("\\male", false, "default", 10.0, "regular", Metrics::new(8.96484375, 7.34375, 7.515625, 0.796875, 8.3125, -0.140625, 7.203125, 7.203125, false)),
    glyph("\\female", false, "default", 10.0, "regular", Metrics::new(7.32421875, 8.5625, 5.609375, 0.859375, 6.46875, -1.25, 7.3125, 7.3125, false)),
    glyph("\\circledR", false, "default", 10.0, "regular", Metrics::new(10.0, 7.25, 7.25, 1.375, 8.625, 0.0, 7.25, 7.25, false)),
    glyph("\\yen", false, "default", 10.0, "regular", Metrics::new(6.3623046875, 7.296875, 5.546875, 0.40625, 5.953125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\sterling", false, "default", 10.0, "regular", Metrics::new(6.3623046875, 7.421875, 4.859375, 0.625, 5.484375, 0.0, 7.421875, 7.421875, false)),
    glyph("\\cent", false, "default", 10.0, "regular", Metrics::new(6.3623046875, 8.53125, 4.328125, 0.84375, 5.171875, -1.53125, 7.0, 7.0, false)),
    glyph("\\backprime", false, "default", 10.0, "regular", Metrics::new(2.2705078125, 1.828125, 1.828125, 0.203125, 2.03125, 5.46875, 7.296875, 7.296875, false)),
    glyph("\\dag", false, "default", 10.0, "regular", Metrics::new(5.0, 8.265625, 4.4375, 0.28125, 4.71875, -0.96875, 7.296875, 7.296875, false)),
    glyph("\\ddag", false, "default", 10.0, "regular", Metrics::new(5.0, 8.265625, 4.4375, 0.28125, 4.71875, -0.96875, 7.296875, 7.296875, false)),
    glyph("é", false, "default", 10.0, "regular", Metrics::new(6.15234375, 8.140625, 5.078125, 0.546875, 5.625, -0.140625, 8.0, 8.0, false)),
    glyph(" ", false, "default", 10.0, "regular", Metrics::new(3.1787109375, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, false)),
    glyph("a", false, "default", 12.0, "regular", Metrics::new(7.353515625, 6.890625, 5.546875, 0.71875, 6.265625, -0.171875, 6.71875, 6.71875, false)),
    glyph("b", false, "default", 12.0, "regular", Metrics::new(7.6171875, 9.296875, 5.875, 1.09375, 6.96875, -0.171875, 9.125, 9.125, false)),
    glyph("c", false, "default", 12.0, "regular", Metrics::new(6.59765625, 6.890625, 5.203125, 0.65625, 5.859375, -0.171875, 6.71875, 6.71875, false)),
    glyph("d", false, "default", 12.0, "regular", Metrics::new(7.6171875, 9.296875, 5.875, 0.65625, 6.53125, -0.171875, 9.125, 9.125, false)),
    glyph("e", false, "default", 12.0, "regular", Metrics::new(7.3828125, 6.890625, 6.09375, 0.65625, 6.75, -0.171875, 6.71875, 6.71875, false)),
    glyph("f", false, "default", 12.0, "regular", Metrics::new(4.224609375, 9.125, 4.171875, 0.28125, 4.453125, 0.0, 9.125, 9.125, false)),
    glyph("g", false, "default", 12.0, "regular", Metrics::new(7.6171875, 9.21875, 5.875, 0.65625, 6.53125, -2.5, 6.71875, 6.71875, false)),
    glyph("h", false, "default", 12.0, "regular", Metrics::new(7.60546875, 9.125, 5.5, 1.09375, 6.59375, 0.0, 9.125, 9.125, false)),
    glyph("i", false, "default", 12.0, "regular", Metrics::new(3.333984375, 9.125, 1.078125, 1.125, 2.203125, 0.0, 9.125, 9.125, false)),
    glyph("j", false, "default", 12.0, "regular", Metrics::new(3.333984375, 11.625, 2.421875, -0.21875, 2.203125, -2.5, 9.125, 9.125, false)),
    glyph("k", false, "default", 12.0, "regular", Metrics::new(6.94921875, 9.125, 5.828125, 1.09375, 6.921875, 0.0, 9.125, 9.125, false)),
    glyph("l", false, "default", 12.0, "regular", Metrics::new(3.333984375, 9.125, 1.078125, 1.125, 2.203125, 0.0, 9.125, 9.125, false)),
    glyph("m", false, "default", 12.0, "regular", Metrics::new(11.689453125, 6.71875, 9.578125, 1.09375, 10.671875, 0.0, 6.71875, 6.71875, false)),
    glyph("n", false, "default", 12.0, "regular", Metrics::new(7.60546875, 6.71875, 5.5, 1.09375, 6.59375, 0.0, 6.71875, 6.71875, false)),
    glyph("o", false, "default", 12.0, "regular", Metrics::new(7.341796875, 6.890625, 6.03125, 0.65625, 6.6875, -0.171875, 6.71875, 6.71875, false)),
    glyph("p", false, "default", 12.0, "regular", Metrics::new(7.6171875, 9.21875, 5.875, 1.09375, 6.96875, -2.5, 6.71875, 6.71875, false)),
    glyph("q", false, "default", 12.0, "regular", Metrics::new(7.6171875, 9.21875, 5.875, 0.65625, 6.53125, -2.5, 6.71875, 6.71875, false)),
    glyph("r", false, "default", 12.0, "regular", Metrics::new(4.93359375, 6.71875, 3.84375, 1.09375, 4.9375, 0.0, 6.71875, 6.71875, false)),
    glyph("s", false, "default", 12.0, "regular", Metrics::new(6.251953125, 6.890625, 5.015625, 0.65625, 5.671875, -0.171875, 6.71875, 6.71875, false)),
    glyph("t", false, "default", 12.0, "regular", Metrics::new(4.705078125, 8.421875, 4.09375, 0.328125, 4.421875, 0.0, 8.421875, 8.421875, false)),
    glyph("u", false, "default", 12.0, "regular", Metrics::new(7.60546875, 6.890625, 5.5, 1.015625, 6.515625, -0.171875, 6.71875, 6.71875, false)),
    glyph("v", false, "default", 12.0, "regular", Metrics::new(7.1015625, 6.5625, 6.390625, 0.359375, 6.75, 0.0, 6.5625, 6.5625, false)),
    glyph("w", false, "default", 12.0, "regular", Metrics::new(9.814453125, 6.5625, 8.8125, 0.5, 9.3125, 0.0, 6.5625, 6.5625, false)),
    glyph("x", false, "default", 12.0, "regular", Metrics::new(7.1015625, 6.5625, 6.359375, 0.34375, 6.703125, 0.0, 6.5625, 6.5625, false)),
    glyph("y", false, "default", 12.0, "regular", Metrics::new(7.1015625, 9.0625, 6.390625, 0.359375, 6.75, -2.5, 6.5625, 6.5625, false)),
    glyph("z", false, "default", 12.0, "regular", Metrics::new(6.298828125, 6.5625, 5.265625, 0.515625, 5.78125, 0.0, 6.5625, 6.5625, false)),
    glyph("A", false, "default", 12.0, "regular", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("B", false, "default", 12.0, "regular", Metrics::new(8.232421875, 8.75, 6.21875, 1.171875, 7.390625, 0.0, 8.75, 8.75, false)),
    glyph("C", false, "default", 12.0, "regular", Metrics::new(8.37890625, 9.078125, 7.0625, 0.671875, 7.734375, -0.171875, 8.90625, 8.90625, false)),
    glyph("D", false, "default", 12.0, "regular", Metrics::new(9.240234375, 8.75, 7.359375, 1.171875, 8.53125, 0.0, 8.75, 8.75, false)),
    glyph("E", false, "default", 12.0, "regular", Metrics::new(7.58203125, 8.75, 5.640625, 1.171875, 6.8125, 0.0, 8.75, 8.75, false)),
    glyph("F", false, "default", 12.0, "regular", Metrics::new(6.90234375, 8.75, 5.03125, 1.171875, 6.203125, 0.0, 8.75, 8.75, false)),
    glyph("G", false, "default", 12.0, "regular", Metrics::new(9.298828125, 9.078125, 7.640625, 0.671875, 8.3125, -0.171875, 8.90625, 8.90625, false)),
    glyph("H", false, "default", 12.0, "regular", Metrics::new(9.0234375, 8.75, 6.671875, 1.171875, 7.84375, 0.0, 8.75, 8.75, false)),
    glyph("I", false, "default", 12.0, "regular", Metrics::new(3.5390625, 8.75, 1.1875, 1.171875, 2.359375, 0.0, 8.75, 8.75, false)),
    glyph("J", false, "default", 12.0, "regular", Metrics::new(3.5390625, 11.15625, 2.984375, -0.625, 2.359375, -2.40625, 8.75, 8.75, false)),
    glyph("K", false, "default", 12.0, "regular", Metrics::new(7.869140625, 8.75, 6.953125, 1.171875, 8.125, 0.0, 8.75, 8.75, false)),
    glyph("L", false, "default", 12.0, "regular", Metrics::new(6.685546875, 8.75, 5.453125, 1.171875, 6.625, 0.0, 8.75, 8.75, false)),
    glyph("M", false, "default", 12.0, "regular", Metrics::new(10.353515625, 8.75, 8.015625, 1.171875, 9.1875, 0.0, 8.75, 8.75, false)),
    glyph("N", false, "default", 12.0, "regular", Metrics::new(8.9765625, 8.75, 6.625, 1.171875, 7.796875, 0.0, 8.75, 8.75, false)),
    glyph("O", false, "default", 12.0, "regular", Metrics::new(9.4453125, 9.078125, 8.09375, 0.671875, 8.765625, -0.171875, 8.90625, 8.90625, false)),
    glyph("P", false, "default", 12.0, "regular", Metrics::new(7.236328125, 8.75, 5.65625, 1.171875, 6.828125, 0.0, 8.75, 8.75, false)),
    glyph("Q", false, "default", 12.0, "regular", Metrics::new(9.4453125, 10.453125, 8.09375, 0.671875, 8.765625, -1.546875, 8.90625, 8.90625, false)),
    glyph("R", false, "default", 12.0, "regular", Metrics::new(8.337890625, 8.75, 6.828125, 1.171875, 8.0, 0.0, 8.75, 8.75, false)),
    glyph("S", false, "default", 12.0, "regular", Metrics::new(7.6171875, 9.078125, 6.15625, 0.796875, 6.953125, -0.171875, 8.90625, 8.90625, false)),
    glyph("T", false, "default", 12.0, "regular", Metrics::new(7.330078125, 8.75, 7.390625, -0.03125, 7.359375, 0.0, 8.75, 8.75, false)),
    glyph("U", false, "default", 12.0, "regular", Metrics::new(8.783203125, 8.921875, 6.6875, 1.046875, 7.734375, -0.171875, 8.75, 8.75, false)),
    glyph("V", false, "default", 12.0, "regular", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("W", false, "default", 12.0, "regular", Metrics::new(11.865234375, 8.75, 11.0625, 0.40625, 11.46875, 0.0, 8.75, 8.75, false)),
    glyph("X", false, "default", 12.0, "regular", Metrics::new(8.220703125, 8.75, 7.484375, 0.359375, 7.84375, 0.0, 8.75, 8.75, false)),
    glyph("Y", false, "default", 12.0, "regular", Metrics::new(7.330078125, 8.75, 7.375, -0.015625, 7.359375, 0.0, 8.75, 8.75, false)),
    glyph("Z", false, "default", 12.0, "regular", Metrics::new(8.220703125, 8.75, 7.140625, 0.546875, 7.6875, 0.0, 8.75, 8.75, false)),
    glyph("\\alpha", false, "default", 12.0, "regular", Metrics::new(7.91015625, 6.84375, 6.6875, 0.65625, 7.34375, -0.140625, 6.703125, 6.703125, false)),
    glyph("\\beta", false, "default", 12.0, "regular", Metrics::new(7.658203125, 11.6875, 5.671875, 1.125, 6.796875, -2.5, 9.1875, 9.1875, false)),
    glyph("\\gamma", false, "default", 12.0, "regular", Metrics::new(7.1015625, 9.0625, 6.5625, 0.1875, 6.75, -2.5, 6.5625, 6.5625, false)),
    glyph("\\delta", false, "default", 12.0, "regular", Metrics::new(7.341796875, 9.078125, 6.03125, 0.65625, 6.6875, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\epsilon", false, "default", 12.0, "regular", Metrics::new(7.3828125, 6.890625, 5.109375, 0.65625, 5.765625, -0.171875, 6.71875, 6.71875, false)),
    glyph("\\varepsilon", false, "default", 12.0, "regular", Metrics::new(6.486328125, 6.90625, 4.890625, 0.78125, 5.671875, -0.171875, 6.734375, 6.734375, false)),
    glyph("\\zeta", false, "default", 12.0, "regular", Metrics::new(6.52734375, 11.640625, 5.328125, 0.625, 5.953125, -2.515625, 9.125, 9.125, false)),
    glyph("\\eta", false, "default", 12.0, "regular", Metrics::new(7.60546875, 9.21875, 5.5, 1.09375, 6.59375, -2.5, 6.71875, 6.71875, false)),
    glyph("\\theta", false, "default", 12.0, "regular", Metrics::new(7.341796875, 9.359375, 6.03125, 0.65625, 6.6875, -0.140625, 9.21875, 9.21875, false)),
    glyph("\\vartheta", false, "default", 12.0, "regular", Metrics::new(7.4296875, 9.359375, 6.03125, 0.65625, 6.6875, -0.140625, 9.21875, 9.21875, false)),
    glyph("\\iota", false, "default", 12.0, "regular", Metrics::new(4.060546875, 6.5625, 2.671875, 0.96875, 3.640625, 0.0, 6.5625, 6.5625, false)),
    glyph("\\kappa", false, "default", 12.0, "regular", Metrics::new(7.072265625, 6.5625, 5.65625, 1.125, 6.78125, 0.0, 6.5625, 6.5625, false)),
    glyph("\\lambda", false, "default", 12.0, "regular", Metrics::new(7.1015625, 9.125, 6.390625, 0.359375, 6.75, 0.0, 9.125, 9.125, false)),
    glyph("\\mu", false, "default", 12.0, "regular", Metrics::new(7.634765625, 9.0625, 6.328125, 1.015625, 7.34375, -2.5, 6.5625, 6.5625, false)),
    glyph("\\nu", false, "default", 12.0, "regular", Metrics::new(6.703125, 6.5625, 5.703125, 0.4375, 6.140625, 0.0, 6.5625, 6.5625, false)),
    glyph("\\xi", false, "default", 12.0, "regular", Metrics::new(6.69140625, 11.640625, 5.375, 0.625, 6.0, -2.515625, 9.125, 9.125, false)),
    glyph("\\pi", false, "default", 12.0, "regular", Metrics::new(7.224609375, 6.796875, 6.453125, 0.4375, 6.890625, -0.234375, 6.5625, 6.5625, false)),
    glyph("\\varpi", false, "default", 12.0, "regular", Metrics::new(10.048828125, 6.734375, 9.265625, 0.375, 9.640625, -0.171875, 6.5625, 6.5625, false)),
    glyph("\\rho", false, "default", 12.0, "regular", Metrics::new(7.6171875, 9.21875, 5.875, 1.09375, 6.96875, -2.5, 6.71875, 6.71875, false)),
    glyph("\\varrho", false, "default", 12.0, "regular", Metrics::new(7.6171875, 9.21875, 5.875, 1.09375, 6.96875, -2.5, 6.71875, 6.71875, false)),
    glyph("\\sigma", false, "default", 12.0, "regular", Metrics::new(7.60546875, 6.734375, 6.59375, 0.65625, 7.25, -0.171875, 6.5625, 6.5625, false)),
    glyph("\\varsigma", false, "default", 12.0, "regular", Metrics::new(7.04296875, 9.234375, 5.203125, 0.65625, 5.859375, -2.515625, 6.71875, 6.71875, false)),
    glyph("\\tau", false, "default", 12.0, "regular", Metrics::new(7.224609375, 6.5625, 6.046875, 0.59375, 6.640625, 0.0, 6.5625, 6.5625, false)),
    glyph("\\upsilon", false, "default", 12.0, "regular", Metrics::new(6.943359375, 6.734375, 5.375, 0.875, 6.25, -0.171875, 6.5625, 6.5625, false)),
    glyph("\\phi", false, "default", 12.0, "regular", Metrics::new(7.916015625, 11.625, 6.5625, 0.65625, 7.21875, -2.5, 9.125, 9.125, false)),
    glyph("\\varphi", false, "default", 12.0, "regular", Metrics::new(7.916015625, 9.109375, 6.5625, 0.65625, 7.21875, -2.5, 6.609375, 6.609375, false)),
    glyph("\\chi", false, "default", 12.0, "regular", Metrics::new(6.931640625, 9.0625, 6.25, 0.34375, 6.59375, -2.5, 6.5625, 6.5625, false)),
    glyph("\\psi", false, "default", 12.0, "regular", Metrics::new(7.916015625, 9.0625, 6.5625, 0.65625, 7.21875, -2.5, 6.5625, 6.5625, false)),
    glyph("\\omega", false, "default", 12.0, "regular", Metrics::new(10.048828125, 6.734375, 8.4375, 0.796875, 9.234375, -0.171875, 6.5625, 6.5625, false)),
    glyph("\\Gamma", false, "default", 12.0, "regular", Metrics::new(6.685546875, 8.75, 5.453125, 1.171875, 6.625, 0.0, 8.75, 8.75, false)),
    glyph("\\Delta", false, "default", 12.0, "regular", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("\\Theta", false, "default", 12.0, "regular", Metrics::new(9.4453125, 9.078125, 8.09375, 0.671875, 8.765625, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\Lambda", false, "default", 12.0, "regular", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("\\Xi", false, "default", 12.0, "regular", Metrics::new(7.58203125, 8.75, 5.40625, 1.171875, 6.578125, 0.0, 8.75, 8.75, false)),
    glyph("\\Pi", false, "default", 12.0, "regular", Metrics::new(9.0234375, 8.75, 6.671875, 1.171875, 7.84375, 0.0, 8.75, 8.75, false)),
    glyph("\\Sigma", false, "default", 12.0, "regular", Metrics::new(7.58203125, 8.75, 5.640625, 1.171875, 6.8125, 0.0, 8.75, 8.75, false)),
    glyph("\\Upsilon", false, "default", 12.0, "regular", Metrics::new(7.330078125, 8.75, 7.375, -0.015625, 7.359375, 0.0, 8.75, 8.75, false)),
    glyph("\\Phi", false, "default", 12.0, "regular", Metrics::new(9.4453125, 8.75, 8.09375, 0.671875, 8.765625, 0.0, 8.75, 8.75, false)),
    glyph("\\Psi", false, "default", 12.0, "regular", Metrics::new(9.4453125, 8.75, 8.109375, 0.671875, 8.78125, 0.0, 8.75, 8.75, false)),
    glyph("\\Omega", false, "default", 12.0, "regular", Metrics::new(9.169921875, 8.859375, 8.265625, 0.453125, 8.71875, 0.0, 8.859375, 8.859375, false)),
    glyph("\\sum", false, "default", 12.0, "regular", Metrics::new(8.0859375, 10.921875, 7.703125, 0.140625, 7.84375, -2.296875, 8.625, 8.625, false)),
    glyph("\\prod", false, "default", 12.0, "regular", Metrics::new(9.08203125, 10.921875, 7.234375, 0.921875, 8.15625, -2.296875, 8.625, 8.625, false)),
    glyph("\\coprod", false, "default", 12.0, "regular", Metrics::new(9.08203125, 10.921875, 7.234375, 0.921875, 8.15625, -2.296875, 8.625, 8.625, false)),
    glyph("\\int", false, "default", 12.0, "regular", Metrics::new(6.251953125, 11.625, 4.875, 0.6875, 5.5625, -2.546875, 9.078125, 9.078125, true)),
    glyph("\\oint", false, "default", 12.0, "regular", Metrics::new(6.251953125, 11.625, 4.875, 0.6875, 5.5625, -2.546875, 9.078125, 9.078125, true)),
    glyph("\\iint", false, "default", 12.0, "regular", Metrics::new(9.46875, 11.625, 8.09375, 0.6875, 8.78125, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\iiint", false, "default", 12.0, "regular", Metrics::new(12.685546875, 11.625, 11.3125, 0.6875, 12.0, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\bigcap", false, "default", 12.0, "regular", Metrics::new(9.84375, 10.921875, 8.203125, 0.828125, 9.03125, -2.296875, 8.625, 8.625, false)),
    glyph("\\bigcup", false, "default", 12.0, "regular", Metrics::new(9.84375, 10.921875, 8.203125, 0.828125, 9.03125, -2.296875, 8.625, 8.625, false)),
    glyph("\\bigvee", false, "default", 12.0, "regular", Metrics::new(9.84375, 10.921875, 9.90625, -0.03125, 9.875, -2.296875, 8.625, 8.625, false)),
    glyph("\\bigwedge", false, "default", 12.0, "regular", Metrics::new(9.84375, 10.921875, 9.90625, -0.03125, 9.875, -2.296875, 8.625, 8.625, false)),
    glyph("\\bigoplus", false, "default", 12.0, "regular", Metrics::new(12.0, 11.34375, 11.3125, 0.34375, 11.65625, -2.375, 8.96875, 8.96875, false)),
    glyph("\\bigotimes", false, "default", 12.0, "regular", Metrics::new(12.0, 11.34375, 11.3125, 0.34375, 11.65625, -2.375, 8.96875, 8.96875, false)),
    glyph("\\pm", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.53125, 7.515625, 1.265625, 8.78125, 0.0, 7.53125, 7.53125, false)),
    glyph("\\mp", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.53125, 7.515625, 1.265625, 8.78125, 0.0, 7.53125, 7.53125, false)),
    glyph("\\times", false, "default", 12.0, "regular", Metrics::new(10.0546875, 6.78125, 6.78125, 1.640625, 8.421875, 0.375, 7.15625, 7.15625, false)),
    glyph("\\div", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.78125, 7.515625, 1.265625, 8.78125, 0.875, 6.65625, 6.65625, false)),
    glyph("\\cdot", false, "default", 12.0, "regular", Metrics::new(3.814453125, 1.484375, 1.234375, 1.28125, 2.515625, 3.421875, 4.90625, 4.90625, false)),
    glyph("\\ast", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.53125, 7.0, 1.53125, 8.53125, 0.0, 7.53125, 7.53125, false)),
    glyph("\\star", false, "default", 12.0, "regular", Metrics::new(7.51171875, 4.359375, 4.59375, 1.453125, 6.046875, 1.78125, 6.140625, 6.140625, false)),
    glyph("\\circ", false, "default", 12.0, "regular", Metrics::new(7.51171875, 3.71875, 3.703125, 1.90625, 5.609375, 1.921875, 5.640625, 5.640625, false)),
    glyph("\\bullet", false, "default", 12.0, "regular", Metrics::new(7.51171875, 3.46875, 3.484375, 2.015625, 5.5, 2.015625, 5.484375, 5.484375, false)),
    glyph("\\cap", false, "default", 12.0, "regular", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\cup", false, "default", 12.0, "regular", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\uplus", false, "default", 12.0, "regular", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.03125, 6.984375, 6.984375, false)),
    glyph("\\sqcap", false, "default", 12.0, "regular", Metrics::new(9.36328125, 7.515625, 6.828125, 1.265625, 8.09375, 0.0, 7.515625, 7.515625, false)),
    glyph("\\sqcup", false, "default", 12.0, "regular", Metrics::new(9.36328125, 7.515625, 6.828125, 1.265625, 8.09375, 0.0, 7.515625, 7.515625, false)),
    glyph("\\vee", false, "default", 12.0, "regular", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\wedge", false, "default", 12.0, "regular", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\setminus", false, "default", 12.0, "regular", Metrics::new(7.640625, 9.859375, 4.046875, 2.3125, 6.359375, -0.640625, 9.21875, 9.21875, false)),
    glyph("\\wr", false, "default", 12.0, "regular", Metrics::new(4.5, 7.515625, 2.0625, 1.21875, 3.28125, 0.0, 7.515625, 7.515625, false)),
    glyph("\\diamond", false, "default", 12.0, "regular", Metrics::new(7.51171875, 5.984375, 5.984375, 0.765625, 6.75, 0.765625, 6.75, 6.75, false)),
    glyph("\\oplus", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\ominus", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\otimes", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\oslash", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\odot", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\bigcirc", false, "default", 12.0, "regular", Metrics::new(10.470703125, 9.234375, 9.15625, 0.65625, 9.8125, -1.5, 7.734375, 7.734375, false)),
    glyph("\\dagger", false, "default", 12.0, "regular", Metrics::new(6.0, 9.90625, 5.34375, 0.328125, 5.671875, -1.15625, 8.75, 8.75, false)),
    glyph("\\ddagger", false, "default", 12.0, "regular", Metrics::new(6.0, 9.90625, 5.34375, 0.328125, 5.671875, -1.15625, 8.75, 8.75, false)),
    glyph("\\leq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 6.984375, 7.515625, 1.265625, 8.78125, 0.0, 6.984375, 6.984375, false)),
    glyph("\\geq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 6.984375, 7.515625, 1.265625, 8.78125, 0.0, 6.984375, 6.984375, false)),
    glyph("\\neq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.0625, 7.515625, 1.265625, 8.78125, 0.234375, 7.296875, 7.296875, false)),
    glyph("\\equiv", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.375, 7.515625, 1.265625, 8.78125, 1.078125, 6.453125, 6.453125, false)),
    glyph("\\sim", false, "default", 12.0, "regular", Metrics::new(10.0546875, 2.0625, 7.515625, 1.265625, 8.78125, 2.734375, 4.796875, 4.796875, false)),
    glyph("\\simeq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 3.875, 7.515625, 1.265625, 8.78125, 2.0625, 5.9375, 5.9375, false)),
    glyph("\\approx", false, "default", 12.0, "regular", Metrics::new(10.0546875, 4.34375, 7.515625, 1.265625, 8.78125, 1.59375, 5.9375, 5.9375, false)),
    glyph("\\cong", false, "default", 12.0, "regular", Metrics::new(10.0546875, 6.046875, 7.515625, 1.265625, 8.78125, 1.078125, 7.125, 7.125, false)),
    glyph("\\propto", false, "default", 12.0, "regular", Metrics::new(8.572265625, 4.5, 5.984375, 1.296875, 7.28125, 1.34375, 5.84375, 5.84375, false)),
    glyph("\\subset", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.609375, 7.65625, 1.203125, 8.859375, 0.953125, 6.5625, 6.5625, false)),
    glyph("\\supset", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.609375, 7.65625, 1.203125, 8.859375, 0.953125, 6.5625, 6.5625, false)),
    glyph("\\subseteq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.359375, 7.671875, 1.109375, 8.78125, 0.0, 7.359375, 7.359375, false)),
    glyph("\\supseteq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.359375, 7.671875, 1.265625, 8.9375, 0.0, 7.359375, 7.359375, false)),
    glyph("\\in", false, "default", 12.0, "regular", Metrics::new(10.453125, 8.625, 8.390625, 1.03125, 9.421875, -0.109375, 8.515625, 8.515625, false)),
    glyph("\\ni", false, "default", 12.0, "regular", Metrics::new(10.453125, 8.625, 8.390625, 1.03125, 9.421875, -0.109375, 8.515625, 8.515625, false)),
    glyph("\\notin", false, "default", 12.0, "regular", Metrics::new(10.453125, 11.6875, 8.390625, 1.03125, 9.421875, -1.65625, 10.03125, 10.03125, false)),
    glyph("\\ll", false, "default", 12.0, "regular", Metrics::new(12.5625, 7.046875, 10.828125, 0.875, 11.703125, 0.265625, 7.3125, 7.3125, false)),
    glyph("\\gg", false, "default", 12.0, "regular", Metrics::new(12.5625, 7.046875, 10.828125, 0.875, 11.703125, 0.265625, 7.3125, 7.3125, false)),
    glyph("\\prec", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.421875, 7.515625, 1.265625, 8.78125, -0.453125, 7.96875, 7.96875, false)),
    glyph("\\succ", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.421875, 7.515625, 1.265625, 8.78125, -0.453125, 7.96875, 7.96875, false)),
    glyph("\\mid", false, "default", 12.0, "regular", Metrics::new(6.0, 11.8125, 0.9375, 2.53125, 3.46875, -2.5625, 9.25, 9.25, false)),
    glyph("\\parallel", false, "default", 12.0, "regular", Metrics::new(6.0, 11.8125, 2.8125, 1.59375, 4.40625, -2.5625, 9.25, 9.25, false)),
    glyph("\\vdash", false, "default", 12.0, "regular", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\dashv", false, "default", 12.0, "regular", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\models", false, "default", 12.0, "regular", Metrics::new(6.24609375, 8.40625, 4.203125, 1.03125, 5.234375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\asymp", false, "default", 12.0, "regular", Metrics::new(10.0546875, 4.984375, 7.515625, 1.265625, 8.78125, 1.265625, 6.25, 6.25, false)),
    glyph("\\doteq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.4375, 7.515625, 1.265625, 8.78125, 2.0625, 7.5, 7.5, false)),
    glyph("\\bowtie", false, "default", 12.0, "regular", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\leftarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\rightarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\uparrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.796875, 5.140625, 2.453125, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\downarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.796875, 5.140625, 2.453125, 7.59375, -0.046875, 8.75, 8.75, false)),
    glyph("\\leftrightarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.875, 0.59375, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\updownarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.890625, 5.140625, 2.453125, 7.59375, -0.09375, 8.796875, 8.796875, false)),
    glyph("\\Leftarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Rightarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Uparrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.796875, 5.125, 2.46875, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\Downarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.796875, 5.125, 2.46875, 7.59375, -0.046875, 8.75, 8.75, false)),
    glyph("\\Leftrightarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.875, 0.59375, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Updownarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.890625, 5.125, 2.46875, 7.59375, -0.09375, 8.796875, 8.796875, false)),
    glyph("\\mapsto", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\longleftarrow", false, "default", 12.0, "regular", Metrics::new(17.203125, 5.125, 15.921875, 0.59375, 16.515625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\longrightarrow", false, "default", 12.0, "regular", Metrics::new(17.203125, 5.125, 15.9375, 0.6875, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\hookleftarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.578125, 8.765625, 0.59375, 9.359375, 1.203125, 6.78125, 6.78125, false)),
    glyph("\\hookrightarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.578125, 8.78125, 0.6875, 9.46875, 1.203125, 6.78125, 6.78125, false)),
    glyph("\\nearrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 6.734375, 6.75, 1.6875, 8.4375, 0.3125, 7.046875, 7.046875, false)),
    glyph("\\searrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 6.734375, 6.75, 1.6875, 8.4375, 0.3125, 7.046875, 7.046875, false)),
    glyph("\\swarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 6.734375, 6.75, 1.6875, 8.4375, 0.3125, 7.046875, 7.046875, false)),
    glyph("\\nwarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 6.734375, 6.75, 1.6875, 8.4375, 0.3125, 7.046875, 7.046875, false)),
    glyph("\\leftharpoonup", false, "default", 12.0, "regular", Metrics::new(10.0546875, 3.0625, 8.78125, 0.59375, 9.375, 3.265625, 6.328125, 6.328125, false)),
    glyph("\\rightharpoonup", false, "default", 12.0, "regular", Metrics::new(10.0546875, 3.0625, 8.78125, 0.6875, 9.46875, 3.265625, 6.328125, 6.328125, false)),
    glyph("\\rightleftharpoons", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.359375, 8.875, 0.59375, 9.46875, 0.078125, 7.4375, 7.4375, false)),
    glyph("\\infty", false, "default", 12.0, "regular", Metrics::new(9.99609375, 4.5, 7.40625, 1.296875, 8.703125, 1.34375, 5.84375, 5.84375, false)),
    glyph("\\partial", false, "default", 12.0, "regular", Metrics::new(6.205078125, 8.125, 5.09375, 0.5625, 5.65625, -0.171875, 7.953125, 7.953125, false)),
    glyph("\\nabla", false, "default", 12.0, "regular", Metrics::new(8.02734375, 8.625, 8.09375, -0.03125, 8.0625, 0.0, 8.625, 8.625, false)),
    glyph("\\forall", false, "default", 12.0, "regular", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("\\exists", false, "default", 12.0, "regular", Metrics::new(7.58203125, 8.75, 5.640625, 1.171875, 6.8125, 0.0, 8.75, 8.75, false)),
    glyph("\\neg", false, "default", 12.0, "regular", Metrics::new(10.0546875, 3.359375, 7.515625, 1.265625, 8.78125, 1.6875, 5.046875, 5.046875, false)),
    glyph("\\emptyset", false, "default", 12.0, "regular", Metrics::new(10.453125, 8.625, 8.640625, 0.90625, 9.546875, -0.109375, 8.515625, 8.515625, false)),
    glyph("\\aleph", false, "default", 12.0, "regular", Metrics::new(8.94140625, 9.078125, 7.9375, 0.609375, 8.546875, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\hbar", false, "default", 12.0, "regular", Metrics::new(8.337890625, 9.125, 6.234375, 0.703125, 6.9375, 0.0, 9.125, 9.125, false)),
    glyph("\\ell", false, "default", 12.0, "regular", Metrics::new(4.95703125, 9.078125, 4.390625, -0.15625, 4.234375, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\wp", false, "default", 12.0, "regular", Metrics::new(8.3671875, 8.59375, 7.25, 0.640625, 7.890625, -2.65625, 5.9375, 5.9375, false)),
    glyph("\\Re", false, "default", 12.0, "regular", Metrics::new(9.767578125, 9.078125, 9.15625, 0.484375, 9.640625, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\Im", false, "default", 12.0, "regular", Metrics::new(8.3671875, 9.078125, 7.28125, 0.625, 7.90625, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\prime", false, "default", 12.0, "regular", Metrics::new(2.724609375, 2.1875, 2.203125, 0.234375, 2.4375, 6.5625, 8.75, 8.75, false)),
    glyph("\\angle", false, "default", 12.0, "regular", Metrics::new(10.7578125, 8.75, 8.390625, 1.03125, 9.421875, 0.0, 8.75, 8.75, false)),
    glyph("\\triangle", false, "default", 12.0, "regular", Metrics::new(9.228515625, 9.1875, 9.15625, 0.03125, 9.1875, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\surd", false, "default", 12.0, "regular", Metrics::new(7.646484375, 9.96875, 7.28125, 0.359375, 7.640625, -0.234375, 9.734375, 9.734375, false)),
    glyph("\\top", false, "default", 12.0, "regular", Metrics::new(10.453125, 8.40625, 8.390625, 1.03125, 9.421875, 0.0, 8.40625, 8.40625, false)),
    glyph("\\bot", false, "default", 12.0, "regular", Metrics::new(10.453125, 8.40625, 8.390625, 1.03125, 9.421875, 0.0, 8.40625, 8.40625, false)),
    glyph("\\flat", false, "default", 12.0, "regular", Metrics::new(5.66015625, 8.796875, 3.640625, 1.0625, 4.703125, -0.03125, 8.765625, 8.765625, false)),
    glyph("\\natural", false, "default", 12.0, "regular", Metrics::new(4.2890625, 8.765625, 2.265625, 1.015625, 3.28125, 0.0, 8.765625, 8.765625, false)),
    glyph("\\sharp", false, "default", 12.0, "regular", Metrics::new(5.806640625, 8.765625, 3.796875, 1.015625, 4.8125, 0.0, 8.765625, 8.765625, false)),
    glyph("\\clubsuit", false, "default", 12.0, "regular", Metrics::new(10.7578125, 8.75, 8.078125, 1.34375, 9.421875, 0.0, 8.75, 8.75, false)),
    glyph("\\diamondsuit", false, "default", 12.0, "regular", Metrics::new(10.7578125, 8.75, 6.71875, 2.015625, 8.734375, 0.0, 8.75, 8.75, false)),
    glyph("\\heartsuit", false, "default", 12.0, "regular", Metrics::new(10.7578125, 8.71875, 8.59375, 1.078125, 9.671875, 0.0, 8.71875, 8.71875, false)),
    glyph("\\spadesuit", false, "default", 12.0, "regular", Metrics::new(10.7578125, 8.75, 6.96875, 1.890625, 8.859375, 0.0, 8.75, 8.75, false)),
    glyph("\\ldots", false, "default", 12.0, "regular", Metrics::new(12.0, 1.484375, 9.234375, 1.390625, 10.625, 0.0, 1.484375, 1.484375, false)),
    glyph("\\cdots", false, "default", 12.0, "regular", Metrics::new(12.0, 1.5, 9.21875, 1.390625, 10.609375, 2.984375, 4.484375, 4.484375, false)),
    glyph("\\vdots", false, "default", 12.0, "regular", Metrics::new(12.0, 9.6875, 1.234375, 5.375, 6.609375, -1.109375, 8.578125, 8.578125, false)),
    glyph("\\ddots", false, "default", 12.0, "regular", Metrics::new(12.0, 9.6875, 9.21875, 1.390625, 10.609375, -1.109375, 8.578125, 8.578125, false)),
    glyph("\\langle", false, "default", 12.0, "regular", Metrics::new(4.681640625, 10.6875, 2.640625, 1.078125, 3.71875, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\rangle", false, "default", 12.0, "regular", Metrics::new(4.681640625, 10.6875, 2.640625, 0.96875, 3.609375, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\lfloor", false, "default", 12.0, "regular", Metrics::new(4.681640625, 10.703125, 2.484375, 1.03125, 3.515625, -1.578125, 9.125, 9.125, false)),
    glyph("\\rfloor", false, "default", 12.0, "regular", Metrics::new(4.681640625, 10.703125, 2.484375, 1.171875, 3.65625, -1.578125, 9.125, 9.125, false)),
    glyph("\\lceil", false, "default", 12.0, "regular", Metrics::new(4.681640625, 10.703125, 2.484375, 1.03125, 3.515625, -1.578125, 9.125, 9.125, false)),
    glyph("\\rceil", false, "default", 12.0, "regular", Metrics::new(4.681640625, 10.703125, 2.484375, 1.171875, 3.65625, -1.578125, 9.125, 9.125, false)),
    glyph("\\lbrace", false, "default", 12.0, "regular", Metrics::new(7.634765625, 11.078125, 4.640625, 1.5, 6.140625, -1.953125, 9.125, 9.125, false)),
    glyph("\\rbrace", false, "default", 12.0, "regular", Metrics::new(7.634765625, 11.078125, 4.640625, 1.5, 6.140625, -1.953125, 9.125, 9.125, false)),
    glyph("\\vert", false, "default", 12.0, "regular", Metrics::new(4.04296875, 12.0, 0.984375, 1.53125, 2.515625, -2.828125, 9.171875, 9.171875, false)),
    glyph("\\Vert", false, "default", 12.0, "regular", Metrics::new(6.0, 12.0, 2.921875, 1.53125, 4.453125, -2.828125, 9.171875, 9.171875, false)),
    glyph("\\backslash", false, "default", 12.0, "regular", Metrics::new(4.04296875, 9.859375, 4.046875, 0.0, 4.046875, -1.109375, 8.75, 8.75, false)),
    glyph("\\S", false, "default", 12.0, "regular", Metrics::new(6.0, 10.046875, 4.90625, 0.546875, 5.453125, -1.140625, 8.90625, 8.90625, false)),
    glyph("\\P", false, "default", 12.0, "regular", Metrics::new(7.634765625, 9.90625, 5.40625, 0.921875, 6.328125, -1.15625, 8.75, 8.75, false)),
    glyph("\\copyright", false, "default", 12.0, "regular", Metrics::new(12.0, 8.703125, 8.6875, 1.65625, 10.34375, 0.0, 8.703125, 8.703125, false)),
    glyph("\\degree", false, "default", 12.0, "regular", Metrics::new(6.0, 3.71875, 3.71875, 1.140625, 4.859375, 5.1875, 8.90625, 8.90625, false)),
    glyph("\\imath", false, "default", 12.0, "regular", Metrics::new(3.333984375, 6.71875, 1.078125, 1.125, 2.203125, 0.0, 6.71875, 6.71875, false)),
    glyph("\\jmath", false, "default", 12.0, "regular", Metrics::new(3.333984375, 9.0625, 2.421875, -0.21875, 2.203125, -2.5, 6.5625, 6.5625, false)),
    glyph("\\nleftarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\nrightarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\twoheadleftarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\twoheadrightarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\leftarrowtail", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\rightarrowtail", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\mapsfrom", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\mapsup", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.796875, 5.125, 2.46875, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\mapsdown", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.796875, 5.125, 2.46875, 7.59375, -0.046875, 8.75, 8.75, false)),
    glyph("\\looparrowleft", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.578125, 8.765625, 0.59375, 9.359375, 1.203125, 6.78125, 6.78125, false)),
    glyph("\\looparrowright", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.578125, 8.78125, 0.6875, 9.46875, 1.203125, 6.78125, 6.78125, false)),
    glyph("\\leftrightsquigarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.875, 0.59375, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\nleftrightarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.296875, 8.875, 0.59375, 9.46875, 1.109375, 6.40625, 6.40625, false)),
    glyph("\\Lsh", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.921875, 5.515625, 2.03125, 7.546875, 0.0, 8.921875, 8.921875, false)),
    glyph("\\Rsh", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.921875, 5.515625, 2.515625, 8.03125, 0.0, 8.921875, 8.921875, false)),
    glyph("\\curvearrowleft", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.578125, 9.328125, 0.265625, 9.59375, 2.4375, 8.015625, 8.015625, false)),
    glyph("\\curvearrowright", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.578125, 9.328125, 0.46875, 9.796875, 2.4375, 8.015625, 8.015625, false)),
    glyph("\\circlearrowleft", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.40625, 7.90625, 1.234375, 9.140625, 0.75, 8.15625, 8.15625, false)),
    glyph("\\circlearrowright", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.40625, 7.90625, 0.921875, 8.828125, 0.75, 8.15625, 8.15625, false)),
    glyph("\\leftharpoondown", false, "default", 12.0, "regular", Metrics::new(10.0546875, 3.0625, 8.78125, 0.59375, 9.375, 1.203125, 4.265625, 4.265625, false)),
    glyph("\\upharpoonright", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.796875, 3.0625, 4.53125, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\upharpoonleft", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.796875, 3.078125, 2.453125, 5.53125, 0.0, 8.796875, 8.796875, false)),
    glyph("\\rightharpoondown", false, "default", 12.0, "regular", Metrics::new(10.0546875, 3.0625, 8.78125, 0.6875, 9.46875, 1.203125, 4.265625, 4.265625, false)),
    glyph("\\downharpoonright", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.796875, 3.0625, 4.53125, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\downharpoonleft", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.796875, 3.078125, 2.453125, 5.53125, 0.0, 8.796875, 8.796875, false)),
    glyph("\\rightleftarrows", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.65625, 8.875, 0.59375, 9.46875, -0.5625, 8.09375, 8.09375, false)),
    glyph("\\leftrightarrows", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.65625, 8.875, 0.59375, 9.46875, -0.5625, 8.09375, 8.09375, false)),
    glyph("\\leftleftarrows", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.65625, 8.78125, 0.59375, 9.375, -0.5625, 8.09375, 8.09375, false)),
    glyph("\\upuparrows", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.796875, 8.65625, 0.703125, 9.359375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\rightrightarrows", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.65625, 8.78125, 0.6875, 9.46875, -0.5625, 8.09375, 8.09375, false)),
    glyph("\\downdownarrows", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.796875, 8.65625, 0.703125, 9.359375, -0.046875, 8.75, 8.75, false)),
    glyph("\\leftrightharpoons", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.359375, 8.875, 0.59375, 9.46875, 0.078125, 7.4375, 7.4375, false)),
    glyph("\\nLeftarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\nLeftrightarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.265625, 8.875, 0.59375, 9.46875, 1.125, 6.390625, 6.390625, false)),
    glyph("\\nRightarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Lleftarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Rrightarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\leftsquigarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\rightsquigarrow", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\longleftrightarrow", false, "default", 12.0, "regular", Metrics::new(17.203125, 5.125, 16.03125, 0.59375, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Longleftarrow", false, "default", 12.0, "regular", Metrics::new(17.203125, 5.125, 15.921875, 0.59375, 16.515625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Longrightarrow", false, "default", 12.0, "regular", Metrics::new(17.203125, 5.125, 15.9375, 0.6875, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Longleftrightarrow", false, "default", 12.0, "regular", Metrics::new(17.203125, 5.125, 16.03125, 0.59375, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\longmapsto", false, "default", 12.0, "regular", Metrics::new(17.203125, 5.125, 15.9375, 0.6875, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\nmid", false, "default", 12.0, "regular", Metrics::new(6.0, 11.8125, 4.8125, 0.59375, 5.40625, -2.5625, 9.25, 9.25, false)),
    glyph("\\nparallel", false, "default", 12.0, "regular", Metrics::new(6.0, 11.8125, 4.8125, 0.59375, 5.40625, -2.5625, 9.25, 9.25, false)),
    glyph("\\backsim", false, "default", 12.0, "regular", Metrics::new(10.0546875, 2.0625, 7.515625, 1.265625, 8.78125, 2.734375, 4.796875, 4.796875, false)),
    glyph("\\nsim", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.71875, 7.515625, 1.265625, 8.78125, 0.921875, 6.640625, 6.640625, false)),
    glyph("\\eqsim", false, "default", 12.0, "regular", Metrics::new(10.0546875, 3.859375, 7.515625, 1.265625, 8.78125, 1.59375, 5.453125, 5.453125, false)),
    glyph("\\ncong", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.953125, 7.515625, 1.265625, 8.78125, -0.0625, 7.890625, 7.890625, false)),
    glyph("\\napprox", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.46875, 7.515625, 1.265625, 8.78125, 0.03125, 7.5, 7.5, false)),
    glyph("\\approxeq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 6.09375, 7.515625, 1.265625, 8.78125, 1.078125, 7.171875, 7.171875, false)),
    glyph("\\allequal", false, "default", 12.0, "regular", Metrics::new(10.0546875, 6.046875, 7.515625, 1.265625, 8.78125, 1.078125, 7.125, 7.125, false)),
    glyph("\\Bumpeq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 6.890625, 7.515625, 1.265625, 8.78125, 0.3125, 7.203125, 7.203125, false)),
    glyph("\\bumpeq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 5.140625, 7.515625, 1.265625, 8.78125, 2.0625, 7.203125, 7.203125, false)),
    glyph("\\Doteq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.484375, 7.515625, 1.265625, 8.78125, 0.015625, 7.5, 7.5, false)),
    glyph("\\fallingdotseq", false, "default", 12.0, "regular", Metrics::new(10.06640625, 7.46875, 7.53125, 1.265625, 8.796875, 0.03125, 7.5, 7.5, false)),
    glyph("\\risingdotseq", false, "default", 12.0, "regular", Metrics::new(10.06640625, 7.46875, 7.53125, 1.265625, 8.796875, 0.03125, 7.5, 7.5, false)),
    glyph("\\coloneq", false, "default", 12.0, "regular", Metrics::new(12.0, 3.90625, 9.578125, 1.21875, 10.796875, 1.8125, 5.71875, 5.71875, false)),
    glyph("\\eqcolon", false, "default", 12.0, "regular", Metrics::new(12.0, 3.890625, 9.59375, 1.203125, 10.796875, 1.8125, 5.703125, 5.703125, false)),
    glyph("\\eqcirc", false, "default", 12.0, "regular", Metrics::new(10.0546875, 3.390625, 7.515625, 1.265625, 8.78125, 2.0625, 5.453125, 5.453125, false)),
    glyph("\\circeq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.0625, 7.515625, 1.265625, 8.78125, 2.0625, 9.125, 9.125, false)),
    glyph("\\wedgeq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.6875, 7.515625, 1.265625, 8.78125, 2.0625, 9.75, 9.75, false)),
    glyph("\\veeeq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.6875, 7.515625, 1.265625, 8.78125, 2.0625, 9.75, 9.75, false)),
    glyph("\\stareq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.125, 7.515625, 1.265625, 8.78125, 2.0625, 10.1875, 10.1875, false)),
    glyph("\\triangleq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.1875, 7.515625, 1.265625, 8.78125, 2.0625, 10.25, 10.25, false)),
    glyph("\\nequiv", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.109375, 7.515625, 1.265625, 8.78125, -0.296875, 7.8125, 7.8125, false)),
    glyph("\\leqq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.65625, 7.515625, 1.28125, 8.796875, -1.0, 7.65625, 7.65625, false)),
    glyph("\\geqq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.65625, 7.515625, 1.28125, 8.796875, -1.0, 7.65625, 7.65625, false)),
    glyph("\\lneqq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 9.625, 7.515625, 1.28125, 8.796875, -1.96875, 7.65625, 7.65625, false)),
    glyph("\\gneqq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 9.625, 7.515625, 1.28125, 8.796875, -1.96875, 7.65625, 7.65625, false)),
    glyph("\\between", false, "default", 12.0, "regular", Metrics::new(5.56640625, 10.6875, 3.5, 1.03125, 4.53125, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\nless", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.0625, 7.515625, 1.265625, 8.78125, 0.03125, 8.09375, 8.09375, false)),
    glyph("\\ngtr", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.0625, 7.515625, 1.265625, 8.78125, -0.5625, 7.5, 7.5, false)),
    glyph("\\nleq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 9.21875, 7.515625, 1.265625, 8.78125, -1.21875, 8.0, 8.0, false)),
    glyph("\\ngeq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 9.21875, 7.515625, 1.265625, 8.78125, -1.21875, 8.0, 8.0, false)),
    glyph("\\lesssim", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.640625, 7.53125, 1.265625, 8.796875, -0.65625, 6.984375, 6.984375, false)),
    glyph("\\gtrsim", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.453125, 7.515625, 1.28125, 8.796875, -0.46875, 6.984375, 6.984375, false)),
    glyph("\\lessgtr", false, "default", 12.0, "regular", Metrics::new(10.0546875, 9.28125, 7.578125, 1.21875, 8.796875, -1.046875, 8.234375, 8.234375, false)),
    glyph("\\gtrless", false, "default", 12.0, "regular", Metrics::new(10.0546875, 9.28125, 7.578125, 1.21875, 8.796875, -1.046875, 8.234375, 8.234375, false)),
    glyph("\\preccurlyeq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 9.28125, 7.515625, 1.265625, 8.78125, -1.265625, 8.015625, 8.015625, false)),
    glyph("\\succcurlyeq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 9.28125, 7.515625, 1.265625, 8.78125, -1.265625, 8.015625, 8.015625, false)),
    glyph("\\precsim", false, "default", 12.0, "regular", Metrics::new(10.0546875, 9.03125, 7.515625, 1.265625, 8.78125, -1.015625, 8.015625, 8.015625, false)),
    glyph("\\succsim", false, "default", 12.0, "regular", Metrics::new(10.0546875, 9.03125, 7.515625, 1.265625, 8.78125, -1.015625, 8.015625, 8.015625, false)),
    glyph("\\nprec", false, "default", 12.0, "regular", Metrics::new(10.0546875, 9.90625, 7.515625, 1.265625, 8.78125, -0.734375, 9.171875, 9.171875, false)),
    glyph("\\nsucc", false, "default", 12.0, "regular", Metrics::new(10.0546875, 9.90625, 7.515625, 1.265625, 8.78125, -1.65625, 8.25, 8.25, false)),
    glyph("\\nsubset", false, "default", 12.0, "regular", Metrics::new(10.0546875, 9.875, 7.65625, 1.203125, 8.859375, -1.15625, 8.71875, 8.71875, false)),
    glyph("\\nsupset", false, "default", 12.0, "regular", Metrics::new(10.0546875, 9.875, 7.65625, 1.203125, 8.859375, -1.203125, 8.671875, 8.671875, false)),
    glyph("\\nsubseteq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 10.15625, 7.671875, 1.109375, 8.78125, -1.390625, 8.765625, 8.765625, false)),
    glyph("\\nsupseteq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 10.15625, 7.671875, 1.265625, 8.9375, -1.390625, 8.765625, 8.765625, false)),
    glyph("\\subsetneq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.234375, 7.671875, 1.109375, 8.78125, -0.875, 7.359375, 7.359375, false)),
    glyph("\\supsetneq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.234375, 7.671875, 1.109375, 8.78125, -0.875, 7.359375, 7.359375, false)),
    glyph("\\sqsubset", false, "default", 12.0, "regular", Metrics::new(10.0546875, 6.8125, 7.515625, 1.265625, 8.78125, 0.0, 6.8125, 6.8125, false)),
    glyph("\\sqsupset", false, "default", 12.0, "regular", Metrics::new(10.0546875, 6.8125, 7.515625, 1.265625, 8.78125, 0.0, 6.8125, 6.8125, false)),
    glyph("\\sqsubseteq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.5625, 7.515625, 1.265625, 8.78125, -1.0, 7.5625, 7.5625, false)),
    glyph("\\sqsupseteq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.5625, 7.515625, 1.265625, 8.78125, -1.0, 7.5625, 7.5625, false)),
    glyph("\\vDash", false, "default", 12.0, "regular", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\Vdash", false, "default", 12.0, "regular", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\Vvdash", false, "default", 12.0, "regular", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\VDash", false, "default", 12.0, "regular", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\nvdash", false, "default", 12.0, "regular", Metrics::new(10.453125, 9.34375, 8.40625, 1.03125, 9.4375, -0.46875, 8.875, 8.875, false)),
    glyph("\\nvDash", false, "default", 12.0, "regular", Metrics::new(10.453125, 9.34375, 8.40625, 1.03125, 9.4375, -0.46875, 8.875, 8.875, false)),
    glyph("\\nVdash", false, "default", 12.0, "regular", Metrics::new(10.453125, 9.34375, 8.40625, 1.03125, 9.4375, -0.46875, 8.875, 8.875, false)),
    glyph("\\nVDash", false, "default", 12.0, "regular", Metrics::new(10.453125, 9.34375, 8.40625, 1.03125, 9.4375, -0.46875, 8.875, 8.875, false)),
    glyph("\\vartriangleleft", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.171875, 7.515625, 1.265625, 8.78125, 0.171875, 7.34375, 7.34375, false)),
    glyph("\\vartriangleright", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.171875, 7.515625, 1.265625, 8.78125, 0.171875, 7.34375, 7.34375, false)),
    glyph("\\trianglelefteq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.671875, 7.515625, 1.265625, 8.78125, -0.578125, 8.09375, 8.09375, false)),
    glyph("\\trianglerighteq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.671875, 7.515625, 1.265625, 8.78125, -0.578125, 8.09375, 8.09375, false)),
    glyph("\\multimap", false, "default", 12.0, "regular", Metrics::new(10.0546875, 3.34375, 8.90625, 0.578125, 9.484375, 2.109375, 5.453125, 5.453125, false)),
    glyph("\\backsimeq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 3.875, 7.515625, 1.265625, 8.78125, 2.0625, 5.9375, 5.9375, false)),
    glyph("\\Subset", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.59375, 7.671875, 1.109375, 8.78125, -0.03125, 7.5625, 7.5625, false)),
    glyph("\\Supset", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.59375, 7.671875, 1.265625, 8.9375, -0.03125, 7.5625, 7.5625, false)),
    glyph("\\pitchfork", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.75, 5.59375, 2.234375, 7.828125, 0.0, 8.75, 8.75, false)),
    glyph("\\lessdot", false, "default", 12.0, "regular", Metrics::new(10.0546875, 6.421875, 7.515625, 1.265625, 8.78125, 0.546875, 6.96875, 6.96875, false)),
    glyph("\\gtrdot", false, "default", 12.0, "regular", Metrics::new(10.0546875, 6.421875, 7.515625, 1.265625, 8.78125, 0.546875, 6.96875, 6.96875, false)),
    glyph("\\lll", false, "default", 12.0, "regular", Metrics::new(17.068359375, 7.046875, 15.328125, 0.875, 16.203125, 0.265625, 7.3125, 7.3125, false)),
    glyph("\\ggg", false, "default", 12.0, "regular", Metrics::new(17.068359375, 7.046875, 15.328125, 0.875, 16.203125, 0.265625, 7.3125, 7.3125, false)),
    glyph("\\lesseqgtr", false, "default", 12.0, "regular", Metrics::new(10.0546875, 12.984375, 7.515625, 1.265625, 8.78125, -2.734375, 10.25, 10.25, false)),
    glyph("\\gtreqless", false, "default", 12.0, "regular", Metrics::new(10.0546875, 12.984375, 7.515625, 1.265625, 8.78125, -2.734375, 10.25, 10.25, false)),
    glyph("\\curlyeqprec", false, "default", 12.0, "regular", Metrics::new(10.0546875, 9.28125, 7.515625, 1.265625, 8.78125, -1.265625, 8.015625, 8.015625, false)),
    glyph("\\curlyeqsucc", false, "default", 12.0, "regular", Metrics::new(10.0546875, 9.28125, 7.515625, 1.265625, 8.78125, -1.265625, 8.015625, 8.015625, false)),
    glyph("\\npreccurlyeq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 11.3125, 7.515625, 1.265625, 8.78125, -2.140625, 9.171875, 9.171875, false)),
    glyph("\\nsucccurlyeq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 11.3125, 7.515625, 1.265625, 8.78125, -2.140625, 9.171875, 9.171875, false)),
    glyph("\\nsqsubseteq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 10.890625, 7.515625, 1.265625, 8.78125, -1.6875, 9.203125, 9.203125, false)),
    glyph("\\nsqsupseteq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 10.890625, 7.515625, 1.265625, 8.78125, -1.6875, 9.203125, 9.203125, false)),
    glyph("\\lnsim", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.640625, 7.53125, 1.265625, 8.796875, -1.65625, 6.984375, 6.984375, false)),
    glyph("\\gnsim", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.640625, 7.53125, 1.265625, 8.796875, -1.65625, 6.984375, 6.984375, false)),
    glyph("\\precnsim", false, "default", 12.0, "regular", Metrics::new(10.0546875, 10.046875, 7.515625, 1.265625, 8.78125, -2.03125, 8.015625, 8.015625, false)),
    glyph("\\succnsim", false, "default", 12.0, "regular", Metrics::new(10.0546875, 10.0625, 7.515625, 1.3125, 8.828125, -2.046875, 8.015625, 8.015625, false)),
    glyph("\\ntriangleleft", false, "default", 12.0, "regular", Metrics::new(10.0546875, 10.640625, 7.515625, 1.265625, 8.78125, -1.5625, 9.078125, 9.078125, false)),
    glyph("\\ntriangleright", false, "default", 12.0, "regular", Metrics::new(10.0546875, 10.640625, 7.515625, 1.265625, 8.78125, -1.5625, 9.078125, 9.078125, false)),
    glyph("\\ntrianglelefteq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 12.046875, 7.515625, 1.265625, 8.78125, -2.265625, 9.78125, 9.78125, false)),
    glyph("\\ntrianglerighteq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 12.046875, 7.515625, 1.25, 8.765625, -2.265625, 9.78125, 9.78125, false)),
    glyph("\\leqslant", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -1.46875, 6.96875, 6.96875, false)),
    glyph("\\geqslant", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -1.46875, 6.96875, 6.96875, false)),
    glyph("\\lessapprox", false, "default", 12.0, "regular", Metrics::new(10.0546875, 9.546875, 7.53125, 1.265625, 8.796875, -1.59375, 7.953125, 7.953125, false)),
    glyph("\\gtrapprox", false, "default", 12.0, "regular", Metrics::new(10.0546875, 9.546875, 7.53125, 1.265625, 8.796875, -1.59375, 7.953125, 7.953125, false)),
    glyph("\\lneq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -1.453125, 6.984375, 6.984375, false)),
    glyph("\\gneq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -1.453125, 6.984375, 6.984375, false)),
    glyph("\\lnapprox", false, "default", 12.0, "regular", Metrics::new(10.0546875, 10.390625, 7.53125, 1.265625, 8.796875, -2.4375, 7.953125, 7.953125, false)),
    glyph("\\gnapprox", false, "default", 12.0, "regular", Metrics::new(10.0546875, 10.390625, 7.53125, 1.265625, 8.796875, -2.4375, 7.953125, 7.953125, false)),
    glyph("\\lesseqqgtr", false, "default", 12.0, "regular", Metrics::new(10.0546875, 13.21875, 7.515625, 1.265625, 8.78125, -3.71875, 9.5, 9.5, false)),
    glyph("\\gtreqqless", false, "default", 12.0, "regular", Metrics::new(10.0546875, 13.21875, 7.515625, 1.265625, 8.78125, -3.71875, 9.5, 9.5, false)),
    glyph("\\eqslantless", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -0.71875, 7.71875, 7.71875, false)),
    glyph("\\eqslantgtr", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -0.71875, 7.71875, 7.71875, false)),
    glyph("\\preceq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.296875, 7.515625, 1.265625, 8.78125, -0.28125, 8.015625, 8.015625, false)),
    glyph("\\succeq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.296875, 7.515625, 1.265625, 8.78125, -0.28125, 8.015625, 8.015625, false)),
    glyph("\\precneqq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 10.28125, 7.515625, 1.265625, 8.78125, -2.34375, 7.9375, 7.9375, false)),
    glyph("\\succneqq", false, "default", 12.0, "regular", Metrics::new(10.0546875, 10.28125, 7.515625, 1.265625, 8.78125, -2.34375, 7.9375, 7.9375, false)),
    glyph("\\precapprox", false, "default", 12.0, "regular", Metrics::new(10.0546875, 10.609375, 7.515625, 1.265625, 8.78125, -2.296875, 8.3125, 8.3125, false)),
    glyph("\\succapprox", false, "default", 12.0, "regular", Metrics::new(10.0546875, 10.609375, 7.515625, 1.265625, 8.78125, -2.296875, 8.3125, 8.3125, false)),
    glyph("\\precnapprox", false, "default", 12.0, "regular", Metrics::new(10.0546875, 11.421875, 7.53125, 1.265625, 8.796875, -3.109375, 8.3125, 8.3125, false)),
    glyph("\\succnapprox", false, "default", 12.0, "regular", Metrics::new(10.0546875, 11.421875, 7.53125, 1.265625, 8.796875, -3.109375, 8.3125, 8.3125, false)),
    glyph("\\dotplus", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.75, 7.515625, 1.265625, 8.78125, 0.0, 8.75, 8.75, false)),
    glyph("\\smallsetminus", false, "default", 12.0, "regular", Metrics::new(7.640625, 9.859375, 4.046875, 2.3125, 6.359375, -0.640625, 9.21875, 9.21875, false)),
    glyph("\\dotminus", false, "default", 12.0, "regular", Metrics::new(10.0546875, 3.359375, 7.515625, 1.265625, 8.78125, 3.265625, 6.625, 6.625, false)),
    glyph("\\cupdot", false, "default", 12.0, "regular", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\circledcirc", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\circledast", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\circleddash", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\boxplus", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\boxminus", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\boxtimes", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\boxdot", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\intercal", false, "default", 12.0, "regular", Metrics::new(6.24609375, 8.40625, 3.46875, 1.390625, 4.859375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\veebar", false, "default", 12.0, "regular", Metrics::new(8.783203125, 8.890625, 6.4375, 1.171875, 7.609375, 0.0, 8.890625, 8.890625, false)),
    glyph("\\barwedge", false, "default", 12.0, "regular", Metrics::new(8.783203125, 8.890625, 6.4375, 1.171875, 7.609375, 0.0, 8.890625, 8.890625, false)),
    glyph("\\barvee", false, "default", 12.0, "regular", Metrics::new(8.783203125, 8.890625, 6.4375, 1.171875, 7.609375, 0.0, 8.890625, 8.890625, false)),
    glyph("\\divideontimes", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.1875, 7.515625, 1.265625, 8.78125, 0.171875, 7.359375, 7.359375, false)),
    glyph("\\ltimes", false, "default", 12.0, "regular", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\rtimes", false, "default", 12.0, "regular", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\leftthreetimes", false, "default", 12.0, "regular", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\rightthreetimes", false, "default", 12.0, "regular", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\curlyvee", false, "default", 12.0, "regular", Metrics::new(8.7890625, 6.953125, 7.625, 0.578125, 8.203125, 0.0, 6.953125, 6.953125, false)),
    glyph("\\curlywedge", false, "default", 12.0, "regular", Metrics::new(8.7890625, 6.953125, 7.625, 0.578125, 8.203125, 0.0, 6.953125, 6.953125, false)),
    glyph("\\Cap", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.953125, 7.59375, 1.234375, 8.828125, 0.0, 7.953125, 7.953125, false)),
    glyph("\\Cup", false, "default", 12.0, "regular", Metrics::new(10.0546875, 7.953125, 7.59375, 1.234375, 8.828125, -0.171875, 7.78125, 7.78125, false)),
    glyph("\\doublebarwedge", false, "default", 12.0, "regular", Metrics::new(10.0546875, 6.15625, 5.140625, 2.453125, 7.59375, 0.0, 6.15625, 6.15625, false)),
    glyph("\\bigodot", false, "default", 12.0, "regular", Metrics::new(12.0, 11.34375, 11.3125, 0.34375, 11.65625, -2.375, 8.96875, 8.96875, false)),
    glyph("\\oiint", false, "default", 12.0, "regular", Metrics::new(9.46875, 11.625, 8.09375, 0.6875, 8.78125, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\oiiint", false, "default", 12.0, "regular", Metrics::new(12.685546875, 11.625, 11.3125, 0.6875, 12.0, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\iiiint", false, "default", 12.0, "regular", Metrics::new(15.90234375, 11.625, 14.53125, 0.6875, 15.21875, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\minus", false, "default", 12.0, "regular", Metrics::new(10.0546875, 1.0, 7.515625, 1.265625, 8.78125, 3.265625, 4.265625, 4.265625, false)),
    glyph("\\cdotp", false, "default", 12.0, "regular", Metrics::new(3.814453125, 1.484375, 1.234375, 1.28125, 2.515625, 3.421875, 4.90625, 4.90625, false)),
    glyph("\\hslash", false, "default", 12.0, "regular", Metrics::new(7.60546875, 9.125, 6.53125, 0.53125, 7.0625, 0.0, 9.125, 9.125, false)),
    glyph("\\beth", false, "default", 12.0, "regular", Metrics::new(8.0859375, 9.078125, 7.859375, -0.03125, 7.828125, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\gimel", false, "default", 12.0, "regular", Metrics::new(5.58984375, 9.328125, 4.71875, 0.15625, 4.875, -0.421875, 8.90625, 8.90625, false)),
    glyph("\\daleth", false, "default", 12.0, "regular", Metrics::new(7.734375, 9.328125, 6.59375, 0.5, 7.09375, -0.421875, 8.90625, 8.90625, false)),
    glyph("\\mho", false, "default", 12.0, "regular", Metrics::new(9.169921875, 8.859375, 8.265625, 0.453125, 8.71875, -0.171875, 8.6875, 8.6875, false)),
    glyph("\\eth", false, "default", 12.0, "regular", Metrics::new(7.341796875, 9.296875, 6.03125, 0.65625, 6.6875, -0.171875, 9.125, 9.125, false)),
    glyph("\\Finv", false, "default", 12.0, "regular", Metrics::new(6.90234375, 8.75, 5.03125, 1.171875, 6.203125, 0.0, 8.75, 8.75, false)),
    glyph("\\Game", false, "default", 12.0, "regular", Metrics::new(9.298828125, 9.078125, 7.640625, 0.953125, 8.59375, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\digamma", false, "default", 12.0, "regular", Metrics::new(5.501953125, 11.625, 6.03125, -1.125, 4.90625, -2.5, 9.125, 9.125, false)),
    glyph("\\varkappa", false, "default", 12.0, "regular", Metrics::new(7.962890625, 6.6875, 6.546875, 0.65625, 7.203125, -0.078125, 6.609375, 6.609375, false)),
    glyph("\\backepsilon", false, "default", 12.0, "regular", Metrics::new(7.3828125, 6.890625, 5.09375, 1.15625, 6.25, -0.171875, 6.71875, 6.71875, false)),
    glyph("\\AA", false, "default", 12.0, "regular", Metrics::new(8.208984375, 11.140625, 8.015625, 0.09375, 8.109375, 0.0, 11.140625, 11.140625, false)),
    glyph("\\ae", false, "default", 12.0, "regular", Metrics::new(11.783203125, 6.890625, 10.4375, 0.71875, 11.15625, -0.171875, 6.71875, 6.71875, false)),
    glyph("\\AE", false, "default", 12.0, "regular", Metrics::new(11.689453125, 8.75, 10.875, 0.046875, 10.921875, 0.0, 8.75, 8.75, false)),
    glyph("\\oe", false, "default", 12.0, "regular", Metrics::new(12.275390625, 6.890625, 10.984375, 0.65625, 11.640625, -0.171875, 6.71875, 6.71875, false)),
    glyph("\\OE", false, "default", 12.0, "regular", Metrics::new(12.837890625, 8.75, 11.40625, 0.671875, 12.078125, 0.0, 8.75, 8.75, false)),
    glyph("\\o", false, "default", 12.0, "regular", Metrics::new(7.341796875, 7.65625, 6.5, 0.421875, 6.921875, -0.546875, 7.109375, 7.109375, false)),
    glyph("\\O", false, "default", 12.0, "regular", Metrics::new(9.4453125, 9.546875, 8.25, 0.59375, 8.84375, -0.40625, 9.140625, 9.140625, false)),
    glyph("\\ss", false, "default", 12.0, "regular", Metrics::new(7.55859375, 9.296875, 5.921875, 1.09375, 7.015625, -0.171875, 9.125, 9.125, false)),
    glyph("\\l", false, "default", 12.0, "regular", Metrics::new(3.41015625, 9.125, 3.40625, 0.015625, 3.421875, 0.0, 9.125, 9.125, false)),
    glyph("\\L", false, "default", 12.0, "regular", Metrics::new(6.744140625, 8.75, 6.765625, -0.078125, 6.6875, 0.0, 8.75, 8.75, false)),
    glyph("\\complement", false, "default", 12.0, "regular", Metrics::new(7.634765625, 9.078125, 5.84375, 0.796875, 6.640625, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\nexists", false, "default", 12.0, "regular", Metrics::new(7.58203125, 9.859375, 5.640625, 1.171875, 6.8125, -0.546875, 9.3125, 9.3125, false)),
    glyph("\\varnothing", false, "default", 12.0, "regular", Metrics::new(10.453125, 8.625, 8.640625, 0.90625, 9.546875, -0.109375, 8.515625, 8.515625, false)),
    glyph("\\smallin", false, "default", 12.0, "regular", Metrics::new(8.61328125, 5.703125, 6.078125, 1.265625, 7.34375, 0.90625, 6.609375, 6.609375, false)),
    glyph("\\QED", false, "default", 12.0, "regular", Metrics::new(7.634765625, 5.828125, 4.109375, 1.765625, 5.875, 0.0, 5.828125, 5.828125, false)),
    glyph("\\measuredangle", false, "default", 12.0, "regular", Metrics::new(10.7578125, 9.375, 8.390625, 1.03125, 9.421875, -0.625, 8.75, 8.75, false)),
    glyph("\\sphericalangle", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.75, 7.40625, 1.390625, 8.796875, -0.03125, 8.71875, 8.71875, false)),
    glyph("\\rightangle", false, "default", 12.0, "regular", Metrics::new(10.0546875, 6.734375, 6.734375, 1.65625, 8.390625, 1.1875, 7.921875, 7.921875, false)),
    glyph("\\therefore", false, "default", 12.0, "regular", Metrics::new(7.634765625, 6.046875, 6.21875, 0.703125, 6.921875, 1.203125, 7.25, 7.25, false)),
    glyph("\\because", false, "default", 12.0, "regular", Metrics::new(7.634765625, 6.046875, 6.21875, 0.703125, 6.921875, 1.203125, 7.25, 7.25, false)),
    glyph("\\Colon", false, "default", 12.0, "regular", Metrics::new(7.634765625, 6.046875, 6.21875, 0.703125, 6.921875, 1.203125, 7.25, 7.25, false)),
    glyph("\\lnot", false, "default", 12.0, "regular", Metrics::new(10.0546875, 3.359375, 7.515625, 1.265625, 8.78125, 1.6875, 5.046875, 5.046875, false)),
    glyph("\\sqrt", false, "default", 12.0, "regular", Metrics::new(7.646484375, 9.96875, 7.28125, 0.359375, 7.640625, -0.234375, 9.734375, 9.734375, false)),
    glyph("\\dots", false, "default", 12.0, "regular", Metrics::new(12.0, 1.484375, 9.234375, 1.390625, 10.625, 0.0, 1.484375, 1.484375, false)),
    glyph("\\adots", false, "default", 12.0, "regular", Metrics::new(12.0, 9.6875, 9.21875, 1.390625, 10.609375, -1.109375, 8.578125, 8.578125, false)),
    glyph("\\ulcorner", false, "default", 12.0, "regular", Metrics::new(5.625, 4.015625, 3.8125, 1.03125, 4.84375, 5.109375, 9.125, 9.125, false)),
    glyph("\\urcorner", false, "default", 12.0, "regular", Metrics::new(5.625, 4.015625, 3.8125, 0.78125, 4.59375, 5.109375, 9.125, 9.125, false)),
    glyph("\\llcorner", false, "default", 12.0, "regular", Metrics::new(5.625, 4.015625, 3.8125, 1.03125, 4.84375, -0.84375, 3.171875, 3.171875, false)),
    glyph("\\lrcorner", false, "default", 12.0, "regular", Metrics::new(5.625, 4.015625, 3.8125, 0.78125, 4.59375, -0.84375, 3.171875, 3.171875, false)),
    glyph("\\lbrack", false, "default", 12.0, "regular", Metrics::new(4.681640625, 10.703125, 2.484375, 1.03125, 3.515625, -1.578125, 9.125, 9.125, false)),
    glyph("\\rbrack", false, "default", 12.0, "regular", Metrics::new(4.681640625, 10.703125, 2.484375, 1.171875, 3.65625, -1.578125, 9.125, 9.125, false)),
    glyph("\\leftparen", false, "default", 12.0, "regular", Metrics::new(4.681640625, 10.6875, 2.6875, 1.03125, 3.71875, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\rightparen", false, "default", 12.0, "regular", Metrics::new(4.681640625, 10.6875, 2.6875, 0.96875, 3.65625, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\bigtriangleup", false, "default", 12.0, "regular", Metrics::new(9.228515625, 9.1875, 9.15625, 0.03125, 9.1875, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\vartriangle", false, "default", 12.0, "regular", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\blacktriangle", false, "default", 12.0, "regular", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\triangleright", false, "default", 12.0, "regular", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\blacktriangleright", false, "default", 12.0, "regular", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\bigtriangledown", false, "default", 12.0, "regular", Metrics::new(9.228515625, 9.1875, 9.15625, 0.03125, 9.1875, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\triangledown", false, "default", 12.0, "regular", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\blacktriangledown", false, "default", 12.0, "regular", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\triangleleft", false, "default", 12.0, "regular", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\blacktriangleleft", false, "default", 12.0, "regular", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\lozenge", false, "default", 12.0, "regular", Metrics::new(5.9296875, 12.484375, 5.859375, 0.03125, 5.890625, -2.796875, 9.6875, 9.6875, false)),
    glyph("\\blacksquare", false, "default", 12.0, "regular", Metrics::new(11.337890625, 9.1875, 9.15625, 1.09375, 10.25, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\square", false, "default", 12.0, "regular", Metrics::new(11.337890625, 9.1875, 9.15625, 1.09375, 10.25, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\Box", false, "default", 12.0, "regular", Metrics::new(11.337890625, 9.1875, 9.15625, 1.09375, 10.25, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\bigstar", false, "default", 12.0, "regular", Metrics::new(10.7578125, 8.71875, 9.203125, 0.78125, 9.984375, -0.046875, 8.671875, 8.671875, false)),
    glyph("\\diagup", false, "default", 12.0, "regular", Metrics::new(7.224609375, 14.015625, 8.265625, -0.515625, 7.75, -2.875, 11.140625, 11.140625, false)),
    glyph("\\diagdown", false, "default", 12.0, "regular", Metrics::new(7.224609375, 14.015625, 8.265625, -0.515625, 7.75, -2.875, 11.140625, 11.140625, false)),
    glyph("\\varspadesuit", false, "default", 12.0, "regular", Metrics::new(10.7578125, 8.75, 6.984375, 1.890625, 8.875, 0.0, 8.75, 8.75, false)),
    glyph("\\varheartsuit", false, "default", 12.0, "regular", Metrics::new(10.7578125, 8.75, 8.640625, 1.0625, 9.703125, 0.0, 8.75, 8.75, false)),
    glyph("\\vardiamondsuit", false, "default", 12.0, "regular", Metrics::new(10.7578125, 8.75, 6.71875, 2.015625, 8.734375, 0.0, 8.75, 8.75, false)),
    glyph("\\varclubsuit", false, "default", 12.0, "regular", Metrics::new(10.7578125, 8.796875, 8.078125, 1.34375, 9.421875, 0.0, 8.796875, 8.796875, false)),
    glyph("\\checkmark", false, "default", 12.0, "regular", Metrics::new(10.0546875, 6.40625, 6.21875, 1.796875, 8.015625, 1.15625, 7.5625, 7.5625, false)),
    glyph("\\maltese", false, "default", 12.0, "regular", Metrics::new(10.0546875, 8.75, 8.75, 0.65625, 9.40625, 0.0, 8.75, 8.75, false)),
    glyph("\\sun", false, "default", 12.0, "regular", Metrics::new(10.7578125, 8.765625, 8.765625, 1.0, 9.765625, 0.0, 8.765625, 8.765625, false)),
    glyph("\\mercury", false, "default", 12.0, "regular", Metrics::new(7.365234375, 10.0, 5.3125, 1.03125, 6.34375, -1.21875, 8.78125, 8.78125, false)),
    glyph("\\venus", false, "default", 12.0, "regular", Metrics::new(8.7890625, 10.28125, 6.734375, 1.03125, 7.765625, -1.5, 8.78125, 8.78125, false)),
    glyph("\\earth", false, "default", 12.0, "regular", Metrics::new(8.7890625, 10.28125, 6.734375, 1.03125, 7.765625, -0.171875, 10.109375, 10.109375, false)),
    glyph("\\mars", false, "default", 12.0, "regular", Metrics::new(10.7578125, 8.8125, 9.015625, 0.953125, 9.96875, -0.171875, 8.640625, 8.640625, false)),
    glyph("\\jupiter", false, "default", 12.0, "regular", Metrics::new(10.7578125, 8.765625, 6.78125, 1.984375, 8.765625, 0.0, 8.765625, 8.765625, false)),
    glyph("\\saturn", false, "default", 12.0, "regular", Metrics::new(10.7578125, 8.765625, 5.5, 2.625, 8.125, 0.0, 8.765625, 8.765625, false)),
    glyph("\\uranus", false, "default", 12.0, "regular", Metrics::new(10.7578125, 8.765625, 7.84375, 1.453125, 9.296875, 0.0, 8.765625, 8.765625, false)),
    glyph("\\neptune", false, "default", 12.0, "regular", Metrics::new(10.7578125, 8.765625, 7.703125, 1.53125, 9.234375, 0.0, 8.765625, 8.765625, false)),
    glyph("\\pluto", false, "default", 12.0, "regular", Metrics::new(10.7578125, 8.765625, 4.984375, 2.890625, 7.875, 0.0, 8.765625, 8.765625, false)),
    glyph("\\male", false, "default", 12.0, "regular", Metrics::new(10.7578125, 8.8125, 9.015625, 0.953125, 9.96875, -0.171875, 8.640625, 8.640625, false)),
    glyph("\\female", false, "default", 12.0, "regular", Metrics::new(8.7890625, 10.28125, 6.734375, 1.03125, 7.765625, -1.5, 8.78125, 8.78125, false)),
    glyph("\\circledR", false, "default", 12.0, "regular", Metrics::new(12.0, 8.703125, 8.6875, 1.65625, 10.34375, 0.0, 8.703125, 8.703125, false)),
    glyph("\\yen", false, "default", 12.0, "regular", Metrics::new(7.634765625, 8.75, 6.65625, 0.484375, 7.140625, 0.0, 8.75, 8.75, false)),
    glyph("\\sterling", false, "default", 12.0, "regular", Metrics::new(7.634765625, 8.90625, 5.828125, 0.75, 6.578125, 0.0, 8.90625, 8.90625, false)),
    glyph("\\cent", false, "default", 12.0, "regular", Metrics::new(7.634765625, 10.21875, 5.1875, 1.015625, 6.203125, -1.828125, 8.390625, 8.390625, false)),
    glyph("\\backprime", false, "default", 12.0, "regular", Metrics::new(2.724609375, 2.1875, 2.203125, 0.234375, 2.4375, 6.5625, 8.75, 8.75, false)),
    glyph("\\dag", false, "default", 12.0, "regular", Metrics::new(6.0, 9.90625, 5.34375, 0.328125, 5.671875, -1.15625, 8.75, 8.75, false)),
    glyph("\\ddag", false, "default", 12.0, "regular", Metrics::new(6.0, 9.90625, 5.34375, 0.328125, 5.671875, -1.15625, 8.75, 8.75, false)),
    glyph("é", false, "default", 12.0, "regular", Metrics::new(7.3828125, 9.765625, 6.09375, 0.65625, 6.75, -0.171875, 9.59375, 9.59375, false)),
    glyph(" ", false, "default", 12.0, "regular", Metrics::new(3.814453125, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, false)),
    glyph("a", false, "default", 10.0, "rm", Metrics::new(6.1279296875, 5.734375, 4.625, 0.59375, 5.21875, -0.140625, 5.59375, 5.59375, false)),
    glyph("b", false, "default", 10.0, "rm", Metrics::new(6.34765625, 7.734375, 4.890625, 0.90625, 5.796875, -0.140625, 7.59375, 7.59375, false)),
    glyph("c", false, "default", 10.0, "rm", Metrics::new(5.498046875, 5.734375, 4.328125, 0.546875, 4.875, -0.140625, 5.59375, 5.59375, false)),
    glyph("d", false, "default", 10.0, "rm", Metrics::new(6.34765625, 7.734375, 4.890625, 0.546875, 5.4375, -0.140625, 7.59375, 7.59375, false)),
    glyph("e", false, "default", 10.0, "rm", Metrics::new(6.15234375, 5.734375, 5.078125, 0.546875, 5.625, -0.140625, 5.59375, 5.59375, false)),
    glyph("f", false, "default", 10.0, "rm", Metrics::new(3.5205078125, 7.59375, 3.484375, 0.234375, 3.71875, 0.0, 7.59375, 7.59375, false)),
    glyph("g", false, "default", 10.0, "rm", Metrics::new(6.34765625, 7.671875, 4.890625, 0.546875, 5.4375, -2.078125, 5.59375, 5.59375, false)),
    glyph("h", false, "default", 10.0, "rm", Metrics::new(6.337890625, 7.59375, 4.578125, 0.90625, 5.484375, 0.0, 7.59375, 7.59375, false)),
    glyph("i", false, "default", 10.0, "rm", Metrics::new(2.7783203125, 7.59375, 0.90625, 0.9375, 1.84375, 0.0, 7.59375, 7.59375, false)),
    glyph("j", false, "default", 10.0, "rm", Metrics::new(2.7783203125, 9.671875, 2.03125, -0.1875, 1.84375, -2.078125, 7.59375, 7.59375, false)),
    glyph("k", false, "default", 10.0, "rm", Metrics::new(5.791015625, 7.59375, 4.859375, 0.90625, 5.765625, 0.0, 7.59375, 7.59375, false)),
    glyph("l", false, "default", 10.0, "rm", Metrics::new(2.7783203125, 7.59375, 0.90625, 0.9375, 1.84375, 0.0, 7.59375, 7.59375, false)),
    glyph("m", false, "default", 10.0, "rm", Metrics::new(9.7412109375, 5.59375, 7.984375, 0.90625, 8.890625, 0.0, 5.59375, 5.59375, false)),
    glyph("n", false, "default", 10.0, "rm", Metrics::new(6.337890625, 5.59375, 4.578125, 0.90625, 5.484375, 0.0, 5.59375, 5.59375, false)),
    glyph("o", false, "default", 10.0, "rm", Metrics::new(6.1181640625, 5.734375, 5.03125, 0.546875, 5.578125, -0.140625, 5.59375, 5.59375, false)),
    glyph("p", false, "default", 10.0, "rm", Metrics::new(6.34765625, 7.671875, 4.890625, 0.90625, 5.796875, -2.078125, 5.59375, 5.59375, false)),
    glyph("q", false, "default", 10.0, "rm", Metrics::new(6.34765625, 7.671875, 4.890625, 0.546875, 5.4375, -2.078125, 5.59375, 5.59375, false)),
    glyph("r", false, "default", 10.0, "rm", Metrics::new(4.111328125, 5.59375, 3.203125, 0.90625, 4.109375, 0.0, 5.59375, 5.59375, false)),
    glyph("s", false, "default", 10.0, "rm", Metrics::new(5.2099609375, 5.734375, 4.171875, 0.546875, 4.71875, -0.140625, 5.59375, 5.59375, false)),
    glyph("t", false, "default", 10.0, "rm", Metrics::new(3.9208984375, 7.015625, 3.421875, 0.265625, 3.6875, 0.0, 7.015625, 7.015625, false)),
    glyph("u", false, "default", 10.0, "rm", Metrics::new(6.337890625, 5.734375, 4.59375, 0.84375, 5.4375, -0.140625, 5.59375, 5.59375, false)),
    glyph("v", false, "default", 10.0, "rm", Metrics::new(5.91796875, 5.46875, 5.328125, 0.296875, 5.625, 0.0, 5.46875, 5.46875, false)),
    glyph("w", false, "default", 10.0, "rm", Metrics::new(8.1787109375, 5.46875, 7.34375, 0.421875, 7.765625, 0.0, 5.46875, 5.46875, false)),
    glyph("x", false, "default", 10.0, "rm", Metrics::new(5.91796875, 5.46875, 5.3125, 0.28125, 5.59375, 0.0, 5.46875, 5.46875, false)),
    glyph("y", false, "default", 10.0, "rm", Metrics::new(5.91796875, 7.546875, 5.328125, 0.296875, 5.625, -2.078125, 5.46875, 5.46875, false)),
    glyph("z", false, "default", 10.0, "rm", Metrics::new(5.2490234375, 5.46875, 4.375, 0.4375, 4.8125, 0.0, 5.46875, 5.46875, false)),
    glyph("A", false, "default", 10.0, "rm", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("B", false, "default", 10.0, "rm", Metrics::new(6.8603515625, 7.296875, 5.171875, 0.984375, 6.15625, 0.0, 7.296875, 7.296875, false)),
    glyph("C", false, "default", 10.0, "rm", Metrics::new(6.982421875, 7.5625, 5.875, 0.5625, 6.4375, -0.140625, 7.421875, 7.421875, false)),
    glyph("D", false, "default", 10.0, "rm", Metrics::new(7.7001953125, 7.296875, 6.125, 0.984375, 7.109375, 0.0, 7.296875, 7.296875, false)),
    glyph("E", false, "default", 10.0, "rm", Metrics::new(6.318359375, 7.296875, 4.6875, 0.984375, 5.671875, 0.0, 7.296875, 7.296875, false)),
    glyph("F", false, "default", 10.0, "rm", Metrics::new(5.751953125, 7.296875, 4.1875, 0.984375, 5.171875, 0.0, 7.296875, 7.296875, false)),
    glyph("G", false, "default", 10.0, "rm", Metrics::new(7.7490234375, 7.5625, 6.359375, 0.5625, 6.921875, -0.140625, 7.421875, 7.421875, false)),
    glyph("H", false, "default", 10.0, "rm", Metrics::new(7.51953125, 7.296875, 5.546875, 0.984375, 6.53125, 0.0, 7.296875, 7.296875, false)),
    glyph("I", false, "default", 10.0, "rm", Metrics::new(2.94921875, 7.296875, 0.984375, 0.984375, 1.96875, 0.0, 7.296875, 7.296875, false)),
    glyph("J", false, "default", 10.0, "rm", Metrics::new(2.94921875, 9.296875, 2.484375, -0.515625, 1.96875, -2.0, 7.296875, 7.296875, false)),
    glyph("K", false, "default", 10.0, "rm", Metrics::new(6.5576171875, 7.296875, 5.78125, 0.984375, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("L", false, "default", 10.0, "rm", Metrics::new(5.5712890625, 7.296875, 4.53125, 0.984375, 5.515625, 0.0, 7.296875, 7.296875, false)),
    glyph("M", false, "default", 10.0, "rm", Metrics::new(8.6279296875, 7.296875, 6.671875, 0.984375, 7.65625, 0.0, 7.296875, 7.296875, false)),
    glyph("N", false, "default", 10.0, "rm", Metrics::new(7.48046875, 7.296875, 5.515625, 0.984375, 6.5, 0.0, 7.296875, 7.296875, false)),
    glyph("O", false, "default", 10.0, "rm", Metrics::new(7.87109375, 7.5625, 6.75, 0.5625, 7.3125, -0.140625, 7.421875, 7.421875, false)),
    glyph("P", false, "default", 10.0, "rm", Metrics::new(6.0302734375, 7.296875, 4.703125, 0.984375, 5.6875, 0.0, 7.296875, 7.296875, false)),
    glyph("Q", false, "default", 10.0, "rm", Metrics::new(7.87109375, 8.703125, 6.75, 0.5625, 7.3125, -1.28125, 7.421875, 7.421875, false)),
    glyph("R", false, "default", 10.0, "rm", Metrics::new(6.9482421875, 7.296875, 5.671875, 0.984375, 6.65625, 0.0, 7.296875, 7.296875, false)),
    glyph("S", false, "default", 10.0, "rm", Metrics::new(6.34765625, 7.5625, 5.140625, 0.65625, 5.796875, -0.140625, 7.421875, 7.421875, false)),
    glyph("T", false, "default", 10.0, "rm", Metrics::new(6.1083984375, 7.296875, 6.171875, -0.03125, 6.140625, 0.0, 7.296875, 7.296875, false)),
    glyph("U", false, "default", 10.0, "rm", Metrics::new(7.3193359375, 7.4375, 5.578125, 0.875, 6.453125, -0.140625, 7.296875, 7.296875, false)),
    glyph("V", false, "default", 10.0, "rm", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("W", false, "default", 10.0, "rm", Metrics::new(9.8876953125, 7.296875, 9.234375, 0.328125, 9.5625, 0.0, 7.296875, 7.296875, false)),
    glyph("X", false, "default", 10.0, "rm", Metrics::new(6.8505859375, 7.296875, 6.234375, 0.296875, 6.53125, 0.0, 7.296875, 7.296875, false)),
    glyph("Y", false, "default", 10.0, "rm", Metrics::new(6.1083984375, 7.296875, 6.140625, -0.015625, 6.125, 0.0, 7.296875, 7.296875, false)),
    glyph("Z", false, "default", 10.0, "rm", Metrics::new(6.8505859375, 7.296875, 5.953125, 0.453125, 6.40625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\alpha", false, "default", 10.0, "rm", Metrics::new(6.591796875, 5.71875, 5.5625, 0.546875, 6.109375, -0.125, 5.59375, 5.59375, false)),
    glyph("\\beta", false, "default", 10.0, "rm", Metrics::new(6.3818359375, 9.734375, 4.734375, 0.9375, 5.671875, -2.078125, 7.65625, 7.65625, false)),
    glyph("\\gamma", false, "default", 10.0, "rm", Metrics::new(5.91796875, 7.546875, 5.46875, 0.15625, 5.625, -2.078125, 5.46875, 5.46875, false)),
    glyph("\\delta", false, "default", 10.0, "rm", Metrics::new(6.1181640625, 7.5625, 5.03125, 0.546875, 5.578125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\epsilon", false, "default", 10.0, "rm", Metrics::new(6.15234375, 5.734375, 4.265625, 0.546875, 4.8125, -0.140625, 5.59375, 5.59375, false)),
    glyph("\\varepsilon", false, "default", 10.0, "rm", Metrics::new(5.4052734375, 5.75, 4.078125, 0.65625, 4.734375, -0.140625, 5.609375, 5.609375, false)),
    glyph("\\zeta", false, "default", 10.0, "rm", Metrics::new(5.439453125, 9.6875, 4.453125, 0.515625, 4.96875, -2.09375, 7.59375, 7.59375, false)),
    glyph("\\eta", false, "default", 10.0, "rm", Metrics::new(6.337890625, 7.671875, 4.578125, 0.90625, 5.484375, -2.078125, 5.59375, 5.59375, false)),
    glyph("\\theta", false, "default", 10.0, "rm", Metrics::new(6.1181640625, 7.78125, 5.03125, 0.546875, 5.578125, -0.109375, 7.671875, 7.671875, false)),
    glyph("\\vartheta", false, "default", 10.0, "rm", Metrics::new(6.19140625, 7.78125, 5.03125, 0.546875, 5.578125, -0.109375, 7.671875, 7.671875, false)),
    glyph("\\iota", false, "default", 10.0, "rm", Metrics::new(3.3837890625, 5.46875, 2.21875, 0.8125, 3.03125, 0.0, 5.46875, 5.46875, false)),
    glyph("\\kappa", false, "default", 10.0, "rm", Metrics::new(5.8935546875, 5.46875, 4.71875, 0.9375, 5.65625, 0.0, 5.46875, 5.46875, false)),
    glyph("\\lambda", false, "default", 10.0, "rm", Metrics::new(5.91796875, 7.59375, 5.328125, 0.296875, 5.625, 0.0, 7.59375, 7.59375, false)),
    glyph("\\mu", false, "default", 10.0, "rm", Metrics::new(6.3623046875, 7.546875, 5.28125, 0.84375, 6.125, -2.078125, 5.46875, 5.46875, false)),
    glyph("\\nu", false, "default", 10.0, "rm", Metrics::new(5.5859375, 5.46875, 4.765625, 0.359375, 5.125, 0.0, 5.46875, 5.46875, false)),
    glyph("\\xi", false, "default", 10.0, "rm", Metrics::new(5.576171875, 9.6875, 4.484375, 0.515625, 5.0, -2.09375, 7.59375, 7.59375, false)),
    glyph("\\pi", false, "default", 10.0, "rm", Metrics::new(6.0205078125, 5.65625, 5.390625, 0.359375, 5.75, -0.1875, 5.46875, 5.46875, false)),
    glyph("\\varpi", false, "default", 10.0, "rm", Metrics::new(8.3740234375, 5.609375, 7.71875, 0.3125, 8.03125, -0.140625, 5.46875, 5.46875, false)),
    glyph("\\rho", false, "default", 10.0, "rm", Metrics::new(6.34765625, 7.671875, 4.890625, 0.90625, 5.796875, -2.078125, 5.59375, 5.59375, false)),
    glyph("\\varrho", false, "default", 10.0, "rm", Metrics::new(6.34765625, 7.671875, 4.890625, 0.90625, 5.796875, -2.078125, 5.59375, 5.59375, false)),
    glyph("\\sigma", false, "default", 10.0, "rm", Metrics::new(6.337890625, 5.609375, 5.5, 0.546875, 6.046875, -0.140625, 5.46875, 5.46875, false)),
    glyph("\\varsigma", false, "default", 10.0, "rm", Metrics::new(5.869140625, 7.6875, 4.328125, 0.546875, 4.875, -2.09375, 5.59375, 5.59375, false)),
    glyph("\\tau", false, "default", 10.0, "rm", Metrics::new(6.0205078125, 5.46875, 5.046875, 0.484375, 5.53125, 0.0, 5.46875, 5.46875, false)),
    glyph("\\upsilon", false, "default", 10.0, "rm", Metrics::new(5.7861328125, 5.609375, 4.46875, 0.734375, 5.203125, -0.140625, 5.46875, 5.46875, false)),
    glyph("\\phi", false, "default", 10.0, "rm", Metrics::new(6.5966796875, 9.671875, 5.46875, 0.546875, 6.015625, -2.078125, 7.59375, 7.59375, false)),
    glyph("\\varphi", false, "default", 10.0, "rm", Metrics::new(6.5966796875, 7.59375, 5.46875, 0.546875, 6.015625, -2.078125, 5.515625, 5.515625, false)),
    glyph("\\chi", false, "default", 10.0, "rm", Metrics::new(5.7763671875, 7.546875, 5.203125, 0.28125, 5.484375, -2.078125, 5.46875, 5.46875, false)),
    glyph("\\psi", false, "default", 10.0, "rm", Metrics::new(6.5966796875, 7.546875, 5.46875, 0.546875, 6.015625, -2.078125, 5.46875, 5.46875, false)),
    glyph("\\omega", false, "default", 10.0, "rm", Metrics::new(8.3740234375, 5.609375, 7.03125, 0.65625, 7.6875, -0.140625, 5.46875, 5.46875, false)),
    glyph("\\Gamma", false, "default", 10.0, "rm", Metrics::new(5.5712890625, 7.296875, 4.53125, 0.984375, 5.515625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Delta", false, "default", 10.0, "rm", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Theta", false, "default", 10.0, "rm", Metrics::new(7.87109375, 7.5625, 6.75, 0.5625, 7.3125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\Lambda", false, "default", 10.0, "rm", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Xi", false, "default", 10.0, "rm", Metrics::new(6.318359375, 7.296875, 4.5, 0.984375, 5.484375, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Pi", false, "default", 10.0, "rm", Metrics::new(7.51953125, 7.296875, 5.546875, 0.984375, 6.53125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Sigma", false, "default", 10.0, "rm", Metrics::new(6.318359375, 7.296875, 4.6875, 0.984375, 5.671875, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Upsilon", false, "default", 10.0, "rm", Metrics::new(6.1083984375, 7.296875, 6.140625, -0.015625, 6.125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Phi", false, "default", 10.0, "rm", Metrics::new(7.87109375, 7.296875, 6.75, 0.5625, 7.3125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Psi", false, "default", 10.0, "rm", Metrics::new(7.87109375, 7.296875, 6.75, 0.5625, 7.3125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Omega", false, "default", 10.0, "rm", Metrics::new(7.6416015625, 7.375, 6.890625, 0.375, 7.265625, 0.0, 7.375, 7.375, false)),
    glyph("\\sum", false, "default", 10.0, "rm", Metrics::new(6.73828125, 9.109375, 6.40625, 0.125, 6.53125, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\prod", false, "default", 10.0, "rm", Metrics::new(7.568359375, 9.109375, 6.03125, 0.765625, 6.796875, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\coprod", false, "default", 10.0, "rm", Metrics::new(7.568359375, 9.109375, 6.03125, 0.765625, 6.796875, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\int", false, "default", 10.0, "rm", Metrics::new(5.2099609375, 9.6875, 4.0625, 0.578125, 4.640625, -2.125, 7.5625, 7.5625, true)),
    glyph("\\oint", false, "default", 10.0, "rm", Metrics::new(5.2099609375, 9.6875, 4.0625, 0.578125, 4.640625, -2.125, 7.5625, 7.5625, true)),
    glyph("\\iint", false, "default", 10.0, "rm", Metrics::new(7.890625, 9.6875, 6.734375, 0.578125, 7.3125, -2.125, 7.5625, 7.5625, false)),
    glyph("\\iiint", false, "default", 10.0, "rm", Metrics::new(10.5712890625, 9.6875, 9.421875, 0.578125, 10.0, -2.125, 7.5625, 7.5625, false)),
    glyph("\\bigcap", false, "default", 10.0, "rm", Metrics::new(8.203125, 9.109375, 6.828125, 0.6875, 7.515625, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\bigcup", false, "default", 10.0, "rm", Metrics::new(8.203125, 9.109375, 6.828125, 0.6875, 7.515625, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\bigvee", false, "default", 10.0, "rm", Metrics::new(8.203125, 9.109375, 8.265625, -0.03125, 8.234375, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\bigwedge", false, "default", 10.0, "rm", Metrics::new(8.203125, 9.109375, 8.265625, -0.03125, 8.234375, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\bigoplus", false, "default", 10.0, "rm", Metrics::new(10.0, 9.453125, 9.4375, 0.28125, 9.71875, -1.984375, 7.46875, 7.46875, false)),
    glyph("\\bigotimes", false, "default", 10.0, "rm", Metrics::new(10.0, 9.453125, 9.4375, 0.28125, 9.71875, -1.984375, 7.46875, 7.46875, false)),
    glyph("\\pm", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.265625, 6.25, 1.0625, 7.3125, 0.0, 6.265625, 6.265625, false)),
    glyph("\\mp", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.265625, 6.25, 1.0625, 7.3125, 0.0, 6.265625, 6.265625, false)),
    glyph("\\times", false, "default", 10.0, "rm", Metrics::new(8.37890625, 5.65625, 5.640625, 1.375, 7.015625, 0.3125, 5.96875, 5.96875, false)),
    glyph("\\div", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.8125, 6.25, 1.0625, 7.3125, 0.734375, 5.546875, 5.546875, false)),
    glyph("\\cdot", false, "default", 10.0, "rm", Metrics::new(3.1787109375, 1.234375, 1.03125, 1.0625, 2.09375, 2.859375, 4.09375, 4.09375, false)),
    glyph("\\ast", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.265625, 5.828125, 1.28125, 7.109375, 0.0, 6.265625, 6.265625, false)),
    glyph("\\star", false, "default", 10.0, "rm", Metrics::new(6.259765625, 3.640625, 3.828125, 1.21875, 5.046875, 1.484375, 5.125, 5.125, false)),
    glyph("\\circ", false, "default", 10.0, "rm", Metrics::new(6.259765625, 3.109375, 3.09375, 1.578125, 4.671875, 1.59375, 4.703125, 4.703125, false)),
    glyph("\\bullet", false, "default", 10.0, "rm", Metrics::new(6.259765625, 2.890625, 2.890625, 1.6875, 4.578125, 1.6875, 4.578125, 4.578125, false)),
    glyph("\\cap", false, "default", 10.0, "rm", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\cup", false, "default", 10.0, "rm", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\uplus", false, "default", 10.0, "rm", Metrics::new(7.3193359375, 5.78125, 4.734375, 1.296875, 6.03125, 0.03125, 5.8125, 5.8125, false)),
    glyph("\\sqcap", false, "default", 10.0, "rm", Metrics::new(7.802734375, 6.265625, 5.6875, 1.0625, 6.75, 0.0, 6.265625, 6.265625, false)),
    glyph("\\sqcup", false, "default", 10.0, "rm", Metrics::new(7.802734375, 6.265625, 5.6875, 1.0625, 6.75, 0.0, 6.265625, 6.265625, false)),
    glyph("\\vee", false, "default", 10.0, "rm", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\wedge", false, "default", 10.0, "rm", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\setminus", false, "default", 10.0, "rm", Metrics::new(6.3671875, 8.21875, 3.375, 1.921875, 5.296875, -0.53125, 7.6875, 7.6875, false)),
    glyph("\\wr", false, "default", 10.0, "rm", Metrics::new(3.75, 6.265625, 1.71875, 1.015625, 2.734375, 0.0, 6.265625, 6.265625, false)),
    glyph("\\diamond", false, "default", 10.0, "rm", Metrics::new(6.259765625, 4.984375, 4.984375, 0.640625, 5.625, 0.640625, 5.625, 5.625, false)),
    glyph("\\oplus", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\ominus", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\otimes", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\oslash", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\odot", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\bigcirc", false, "default", 10.0, "rm", Metrics::new(8.7255859375, 7.703125, 7.625, 0.546875, 8.171875, -1.25, 6.453125, 6.453125, false)),
    glyph("\\dagger", false, "default", 10.0, "rm", Metrics::new(5.0, 8.265625, 4.4375, 0.28125, 4.71875, -0.96875, 7.296875, 7.296875, false)),
    glyph("\\ddagger", false, "default", 10.0, "rm", Metrics::new(5.0, 8.265625, 4.4375, 0.28125, 4.71875, -0.96875, 7.296875, 7.296875, false)),
    glyph("\\leq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 5.828125, 6.25, 1.0625, 7.3125, 0.0, 5.828125, 5.828125, false)),
    glyph("\\geq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 5.828125, 6.25, 1.0625, 7.3125, 0.0, 5.828125, 5.828125, false)),
    glyph("\\neq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 5.890625, 6.25, 1.0625, 7.3125, 0.1875, 6.078125, 6.078125, false)),
    glyph("\\equiv", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.46875, 6.25, 1.0625, 7.3125, 0.90625, 5.375, 5.375, false)),
    glyph("\\sim", false, "default", 10.0, "rm", Metrics::new(8.37890625, 1.71875, 6.25, 1.0625, 7.3125, 2.28125, 4.0, 4.0, false)),
    glyph("\\simeq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 3.21875, 6.25, 1.0625, 7.3125, 1.71875, 4.9375, 4.9375, false)),
    glyph("\\approx", false, "default", 10.0, "rm", Metrics::new(8.37890625, 3.609375, 6.25, 1.0625, 7.3125, 1.328125, 4.9375, 4.9375, false)),
    glyph("\\cong", false, "default", 10.0, "rm", Metrics::new(8.37890625, 5.03125, 6.25, 1.0625, 7.3125, 0.90625, 5.9375, 5.9375, false)),
    glyph("\\propto", false, "default", 10.0, "rm", Metrics::new(7.1435546875, 3.75, 4.984375, 1.078125, 6.0625, 1.125, 4.875, 4.875, false)),
    glyph("\\subset", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.671875, 6.390625, 1.0, 7.390625, 0.796875, 5.46875, 5.46875, false)),
    glyph("\\supset", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.671875, 6.390625, 1.0, 7.390625, 0.796875, 5.46875, 5.46875, false)),
    glyph("\\subseteq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.140625, 6.390625, 0.921875, 7.3125, 0.0, 6.140625, 6.140625, false)),
    glyph("\\supseteq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.140625, 6.390625, 1.0625, 7.453125, 0.0, 6.140625, 6.140625, false)),
    glyph("\\in", false, "default", 10.0, "rm", Metrics::new(8.7109375, 7.1875, 7.0, 0.859375, 7.859375, -0.09375, 7.09375, 7.09375, false)),
    glyph("\\ni", false, "default", 10.0, "rm", Metrics::new(8.7109375, 7.1875, 7.0, 0.859375, 7.859375, -0.09375, 7.09375, 7.09375, false)),
    glyph("\\notin", false, "default", 10.0, "rm", Metrics::new(8.7109375, 9.734375, 7.0, 0.859375, 7.859375, -1.375, 8.359375, 8.359375, false)),
    glyph("\\ll", false, "default", 10.0, "rm", Metrics::new(10.46875, 5.875, 9.03125, 0.71875, 9.75, 0.21875, 6.09375, 6.09375, false)),
    glyph("\\gg", false, "default", 10.0, "rm", Metrics::new(10.46875, 5.875, 9.03125, 0.71875, 9.75, 0.21875, 6.09375, 6.09375, false)),
    glyph("\\prec", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.015625, 6.25, 1.0625, 7.3125, -0.375, 6.640625, 6.640625, false)),
    glyph("\\succ", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.015625, 6.25, 1.0625, 7.3125, -0.375, 6.640625, 6.640625, false)),
    glyph("\\mid", false, "default", 10.0, "rm", Metrics::new(5.0, 9.84375, 0.78125, 2.109375, 2.890625, -2.140625, 7.703125, 7.703125, false)),
    glyph("\\parallel", false, "default", 10.0, "rm", Metrics::new(5.0, 9.84375, 2.34375, 1.328125, 3.671875, -2.140625, 7.703125, 7.703125, false)),
    glyph("\\vdash", false, "default", 10.0, "rm", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\dashv", false, "default", 10.0, "rm", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\models", false, "default", 10.0, "rm", Metrics::new(5.205078125, 7.0, 3.5, 0.859375, 4.359375, 0.0, 7.0, 7.0, false)),
    glyph("\\asymp", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.15625, 6.25, 1.0625, 7.3125, 1.046875, 5.203125, 5.203125, false)),
    glyph("\\doteq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.53125, 6.25, 1.0625, 7.3125, 1.71875, 6.25, 6.25, false)),
    glyph("\\bowtie", false, "default", 10.0, "rm", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\leftarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\rightarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\uparrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.328125, 4.28125, 2.046875, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\downarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.328125, 4.28125, 2.046875, 6.328125, -0.03125, 7.296875, 7.296875, false)),
    glyph("\\leftrightarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.40625, 0.484375, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\updownarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.40625, 4.28125, 2.046875, 6.328125, -0.078125, 7.328125, 7.328125, false)),
    glyph("\\Leftarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Rightarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Uparrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.328125, 4.265625, 2.0625, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\Downarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.328125, 4.265625, 2.0625, 6.328125, -0.03125, 7.296875, 7.296875, false)),
    glyph("\\Leftrightarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.40625, 0.484375, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Updownarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.40625, 4.28125, 2.046875, 6.328125, -0.078125, 7.328125, 7.328125, false)),
    glyph("\\mapsto", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\longleftarrow", false, "default", 10.0, "rm", Metrics::new(14.3359375, 4.28125, 13.28125, 0.484375, 13.765625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\longrightarrow", false, "default", 10.0, "rm", Metrics::new(14.3359375, 4.28125, 13.265625, 0.578125, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\hookleftarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.65625, 7.3125, 0.484375, 7.796875, 1.0, 5.65625, 5.65625, false)),
    glyph("\\hookrightarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.65625, 7.3125, 0.578125, 7.890625, 1.0, 5.65625, 5.65625, false)),
    glyph("\\nearrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 5.625, 5.625, 1.40625, 7.03125, 0.25, 5.875, 5.875, false)),
    glyph("\\searrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 5.625, 5.625, 1.40625, 7.03125, 0.25, 5.875, 5.875, false)),
    glyph("\\swarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 5.625, 5.625, 1.40625, 7.03125, 0.25, 5.875, 5.875, false)),
    glyph("\\nwarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 5.625, 5.625, 1.40625, 7.03125, 0.25, 5.875, 5.875, false)),
    glyph("\\leftharpoonup", false, "default", 10.0, "rm", Metrics::new(8.37890625, 2.5625, 7.328125, 0.484375, 7.8125, 2.71875, 5.28125, 5.28125, false)),
    glyph("\\rightharpoonup", false, "default", 10.0, "rm", Metrics::new(8.37890625, 2.5625, 7.3125, 0.578125, 7.890625, 2.71875, 5.28125, 5.28125, false)),
    glyph("\\rightleftharpoons", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.140625, 7.40625, 0.484375, 7.890625, 0.0625, 6.203125, 6.203125, false)),
    glyph("\\infty", false, "default", 10.0, "rm", Metrics::new(8.330078125, 3.75, 6.171875, 1.078125, 7.25, 1.125, 4.875, 4.875, false)),
    glyph("\\partial", false, "default", 10.0, "rm", Metrics::new(5.1708984375, 6.765625, 4.234375, 0.46875, 4.703125, -0.140625, 6.625, 6.625, false)),
    glyph("\\nabla", false, "default", 10.0, "rm", Metrics::new(6.689453125, 7.1875, 6.75, -0.03125, 6.71875, 0.0, 7.1875, 7.1875, false)),
    glyph("\\forall", false, "default", 10.0, "rm", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\exists", false, "default", 10.0, "rm", Metrics::new(6.318359375, 7.296875, 4.6875, 0.984375, 5.671875, 0.0, 7.296875, 7.296875, false)),
    glyph("\\neg", false, "default", 10.0, "rm", Metrics::new(8.37890625, 2.796875, 6.25, 1.0625, 7.3125, 1.40625, 4.203125, 4.203125, false)),
    glyph("\\emptyset", false, "default", 10.0, "rm", Metrics::new(8.7109375, 7.1875, 7.203125, 0.75, 7.953125, -0.09375, 7.09375, 7.09375, false)),
    glyph("\\aleph", false, "default", 10.0, "rm", Metrics::new(7.451171875, 7.5625, 6.625, 0.5, 7.125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\hbar", false, "default", 10.0, "rm", Metrics::new(6.9482421875, 7.59375, 5.1875, 0.59375, 5.78125, 0.0, 7.59375, 7.59375, false)),
    glyph("\\ell", false, "default", 10.0, "rm", Metrics::new(4.130859375, 7.5625, 3.671875, -0.140625, 3.53125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\wp", false, "default", 10.0, "rm", Metrics::new(6.97265625, 7.171875, 6.046875, 0.53125, 6.578125, -2.21875, 4.953125, 4.953125, false)),
    glyph("\\Re", false, "default", 10.0, "rm", Metrics::new(8.1396484375, 7.5625, 7.625, 0.40625, 8.03125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\Im", false, "default", 10.0, "rm", Metrics::new(6.97265625, 7.5625, 6.078125, 0.515625, 6.59375, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\prime", false, "default", 10.0, "rm", Metrics::new(2.2705078125, 1.828125, 1.828125, 0.203125, 2.03125, 5.46875, 7.296875, 7.296875, false)),
    glyph("\\angle", false, "default", 10.0, "rm", Metrics::new(8.96484375, 7.296875, 7.0, 0.859375, 7.859375, 0.0, 7.296875, 7.296875, false)),
    glyph("\\triangle", false, "default", 10.0, "rm", Metrics::new(7.6904296875, 7.65625, 7.625, 0.03125, 7.65625, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\surd", false, "default", 10.0, "rm", Metrics::new(6.3720703125, 8.3125, 6.078125, 0.296875, 6.375, -0.203125, 8.109375, 8.109375, false)),
    glyph("\\top", false, "default", 10.0, "rm", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\bot", false, "default", 10.0, "rm", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\flat", false, "default", 10.0, "rm", Metrics::new(4.716796875, 7.34375, 3.03125, 0.890625, 3.921875, -0.03125, 7.3125, 7.3125, false)),
    glyph("\\natural", false, "default", 10.0, "rm", Metrics::new(3.57421875, 7.3125, 1.890625, 0.84375, 2.734375, 0.0, 7.3125, 7.3125, false)),
    glyph("\\sharp", false, "default", 10.0, "rm", Metrics::new(4.8388671875, 7.3125, 3.15625, 0.84375, 4.0, 0.0, 7.3125, 7.3125, false)),
    glyph("\\clubsuit", false, "default", 10.0, "rm", Metrics::new(8.96484375, 7.28125, 6.734375, 1.109375, 7.84375, 0.0, 7.28125, 7.28125, false)),
    glyph("\\diamondsuit", false, "default", 10.0, "rm", Metrics::new(8.96484375, 7.28125, 5.59375, 1.6875, 7.28125, 0.0, 7.28125, 7.28125, false)),
    glyph("\\heartsuit", false, "default", 10.0, "rm", Metrics::new(8.96484375, 7.265625, 7.15625, 0.90625, 8.0625, 0.0, 7.265625, 7.265625, false)),
    glyph("\\spadesuit", false, "default", 10.0, "rm", Metrics::new(8.96484375, 7.28125, 5.8125, 1.578125, 7.390625, 0.0, 7.28125, 7.28125, false)),
    glyph("\\ldots", false, "default", 10.0, "rm", Metrics::new(10.0, 1.234375, 7.6875, 1.15625, 8.84375, 0.0, 1.234375, 1.234375, false)),
    glyph("\\cdots", false, "default", 10.0, "rm", Metrics::new(10.0, 1.25, 7.6875, 1.15625, 8.84375, 2.484375, 3.734375, 3.734375, false)),
    glyph("\\vdots", false, "default", 10.0, "rm", Metrics::new(10.0, 8.078125, 1.03125, 4.484375, 5.515625, -0.921875, 7.15625, 7.15625, false)),
    glyph("\\ddots", false, "default", 10.0, "rm", Metrics::new(10.0, 8.078125, 7.6875, 1.15625, 8.84375, -0.921875, 7.15625, 7.15625, false)),
    glyph("\\langle", false, "default", 10.0, "rm", Metrics::new(3.9013671875, 8.90625, 2.203125, 0.890625, 3.09375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rangle", false, "default", 10.0, "rm", Metrics::new(3.9013671875, 8.90625, 2.21875, 0.796875, 3.015625, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\lfloor", false, "default", 10.0, "rm", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.859375, 2.9375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rfloor", false, "default", 10.0, "rm", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.96875, 3.046875, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\lceil", false, "default", 10.0, "rm", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.859375, 2.9375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rceil", false, "default", 10.0, "rm", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.96875, 3.046875, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\lbrace", false, "default", 10.0, "rm", Metrics::new(6.3623046875, 9.21875, 3.859375, 1.25, 5.109375, -1.625, 7.59375, 7.59375, false)),
    glyph("\\rbrace", false, "default", 10.0, "rm", Metrics::new(6.3623046875, 9.21875, 3.859375, 1.25, 5.109375, -1.625, 7.59375, 7.59375, false)),
    glyph("\\vert", false, "default", 10.0, "rm", Metrics::new(3.369140625, 10.0, 0.828125, 1.265625, 2.09375, -2.359375, 7.640625, 7.640625, false)),
    glyph("\\Vert", false, "default", 10.0, "rm", Metrics::new(5.0, 10.0, 2.453125, 1.265625, 3.71875, -2.359375, 7.640625, 7.640625, false)),
    glyph("\\backslash", false, "default", 10.0, "rm", Metrics::new(3.369140625, 8.21875, 3.375, 0.0, 3.375, -0.921875, 7.296875, 7.296875, false)),
    glyph("\\S", false, "default", 10.0, "rm", Metrics::new(5.0, 8.375, 4.09375, 0.453125, 4.546875, -0.953125, 7.421875, 7.421875, false)),
    glyph("\\P", false, "default", 10.0, "rm", Metrics::new(6.3623046875, 8.265625, 4.515625, 0.765625, 5.28125, -0.96875, 7.296875, 7.296875, false)),
    glyph("\\copyright", false, "default", 10.0, "rm", Metrics::new(10.0, 7.25, 7.25, 1.375, 8.625, 0.0, 7.25, 7.25, false)),
    glyph("\\degree", false, "default", 10.0, "rm", Metrics::new(5.0, 3.09375, 3.09375, 0.953125, 4.046875, 4.328125, 7.421875, 7.421875, false)),
    glyph("\\imath", false, "default", 10.0, "rm", Metrics::new(2.7783203125, 5.59375, 0.90625, 0.9375, 1.84375, 0.0, 5.59375, 5.59375, false)),
    glyph("\\jmath", false, "default", 10.0, "rm", Metrics::new(2.7783203125, 7.546875, 2.03125, -0.1875, 1.84375, -2.078125, 5.46875, 5.46875, false)),
    glyph("\\nleftarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\nrightarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\twoheadleftarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\twoheadrightarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\leftarrowtail", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\rightarrowtail", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\mapsfrom", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\mapsup", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.328125, 4.265625, 2.0625, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\mapsdown", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.328125, 4.265625, 2.0625, 6.328125, -0.03125, 7.296875, 7.296875, false)),
    glyph("\\looparrowleft", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.65625, 7.3125, 0.484375, 7.796875, 1.0, 5.65625, 5.65625, false)),
    glyph("\\looparrowright", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.65625, 7.3125, 0.578125, 7.890625, 1.0, 5.65625, 5.65625, false)),
    glyph("\\leftrightsquigarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.40625, 0.484375, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\nleftrightarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.421875, 7.40625, 0.484375, 7.890625, 0.921875, 5.34375, 5.34375, false)),
    glyph("\\Lsh", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.4375, 4.609375, 1.6875, 6.296875, 0.0, 7.4375, 7.4375, false)),
    glyph("\\Rsh", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.4375, 4.59375, 2.09375, 6.6875, 0.0, 7.4375, 7.4375, false)),
    glyph("\\curvearrowleft", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.65625, 7.78125, 0.21875, 8.0, 2.03125, 6.6875, 6.6875, false)),
    glyph("\\curvearrowright", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.65625, 7.765625, 0.390625, 8.15625, 2.03125, 6.6875, 6.6875, false)),
    glyph("\\circlearrowleft", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.171875, 6.59375, 1.03125, 7.625, 0.625, 6.796875, 6.796875, false)),
    glyph("\\circlearrowright", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.171875, 6.59375, 0.765625, 7.359375, 0.625, 6.796875, 6.796875, false)),
    glyph("\\leftharpoondown", false, "default", 10.0, "rm", Metrics::new(8.37890625, 2.546875, 7.328125, 0.484375, 7.8125, 1.0, 3.546875, 3.546875, false)),
    glyph("\\upharpoonright", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.328125, 2.546875, 3.78125, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\upharpoonleft", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.328125, 2.5625, 2.046875, 4.609375, 0.0, 7.328125, 7.328125, false)),
    glyph("\\rightharpoondown", false, "default", 10.0, "rm", Metrics::new(8.37890625, 2.546875, 7.3125, 0.578125, 7.890625, 1.0, 3.546875, 3.546875, false)),
    glyph("\\downharpoonright", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.328125, 2.546875, 3.78125, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\downharpoonleft", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.328125, 2.5625, 2.046875, 4.609375, 0.0, 7.328125, 7.328125, false)),
    glyph("\\rightleftarrows", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.203125, 7.40625, 0.484375, 7.890625, -0.46875, 6.734375, 6.734375, false)),
    glyph("\\leftrightarrows", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.203125, 7.40625, 0.484375, 7.890625, -0.46875, 6.734375, 6.734375, false)),
    glyph("\\leftleftarrows", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.203125, 7.328125, 0.484375, 7.8125, -0.46875, 6.734375, 6.734375, false)),
    glyph("\\upuparrows", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.328125, 7.203125, 0.59375, 7.796875, 0.0, 7.328125, 7.328125, false)),
    glyph("\\rightrightarrows", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.203125, 7.3125, 0.578125, 7.890625, -0.46875, 6.734375, 6.734375, false)),
    glyph("\\downdownarrows", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.328125, 7.203125, 0.59375, 7.796875, -0.03125, 7.296875, 7.296875, false)),
    glyph("\\leftrightharpoons", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.140625, 7.40625, 0.484375, 7.890625, 0.0625, 6.203125, 6.203125, false)),
    glyph("\\nLeftarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\nLeftrightarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.390625, 7.40625, 0.484375, 7.890625, 0.9375, 5.328125, 5.328125, false)),
    glyph("\\nRightarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Lleftarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Rrightarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\leftsquigarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\rightsquigarrow", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\longleftrightarrow", false, "default", 10.0, "rm", Metrics::new(14.3359375, 4.28125, 13.359375, 0.484375, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Longleftarrow", false, "default", 10.0, "rm", Metrics::new(14.3359375, 4.28125, 13.28125, 0.484375, 13.765625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Longrightarrow", false, "default", 10.0, "rm", Metrics::new(14.3359375, 4.28125, 13.265625, 0.578125, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Longleftrightarrow", false, "default", 10.0, "rm", Metrics::new(14.3359375, 4.28125, 13.359375, 0.484375, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\longmapsto", false, "default", 10.0, "rm", Metrics::new(14.3359375, 4.28125, 13.265625, 0.578125, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\nmid", false, "default", 10.0, "rm", Metrics::new(5.0, 9.84375, 4.0, 0.5, 4.5, -2.140625, 7.703125, 7.703125, false)),
    glyph("\\nparallel", false, "default", 10.0, "rm", Metrics::new(5.0, 9.84375, 4.0, 0.5, 4.5, -2.140625, 7.703125, 7.703125, false)),
    glyph("\\backsim", false, "default", 10.0, "rm", Metrics::new(8.37890625, 1.71875, 6.25, 1.0625, 7.3125, 2.28125, 4.0, 4.0, false)),
    glyph("\\nsim", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.765625, 6.25, 1.0625, 7.3125, 0.765625, 5.53125, 5.53125, false)),
    glyph("\\eqsim", false, "default", 10.0, "rm", Metrics::new(8.37890625, 3.21875, 6.25, 1.0625, 7.3125, 1.328125, 4.546875, 4.546875, false)),
    glyph("\\ncong", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.625, 6.25, 1.0625, 7.3125, -0.046875, 6.578125, 6.578125, false)),
    glyph("\\napprox", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.21875, 6.25, 1.0625, 7.3125, 0.03125, 6.25, 6.25, false)),
    glyph("\\approxeq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 5.078125, 6.25, 1.0625, 7.3125, 0.90625, 5.984375, 5.984375, false)),
    glyph("\\allequal", false, "default", 10.0, "rm", Metrics::new(8.37890625, 5.03125, 6.25, 1.0625, 7.3125, 0.90625, 5.9375, 5.9375, false)),
    glyph("\\Bumpeq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 5.734375, 6.25, 1.0625, 7.3125, 0.265625, 6.0, 6.0, false)),
    glyph("\\bumpeq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 4.28125, 6.25, 1.0625, 7.3125, 1.71875, 6.0, 6.0, false)),
    glyph("\\Doteq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.234375, 6.25, 1.0625, 7.3125, 0.015625, 6.25, 6.25, false)),
    glyph("\\fallingdotseq", false, "default", 10.0, "rm", Metrics::new(8.388671875, 6.21875, 6.265625, 1.0625, 7.328125, 0.03125, 6.25, 6.25, false)),
    glyph("\\risingdotseq", false, "default", 10.0, "rm", Metrics::new(8.388671875, 6.21875, 6.265625, 1.0625, 7.328125, 0.03125, 6.25, 6.25, false)),
    glyph("\\coloneq", false, "default", 10.0, "rm", Metrics::new(10.0, 3.25, 7.984375, 1.015625, 9.0, 1.515625, 4.765625, 4.765625, false)),
    glyph("\\eqcolon", false, "default", 10.0, "rm", Metrics::new(10.0, 3.234375, 8.0, 1.0, 9.0, 1.515625, 4.75, 4.75, false)),
    glyph("\\eqcirc", false, "default", 10.0, "rm", Metrics::new(8.37890625, 2.828125, 6.25, 1.0625, 7.3125, 1.71875, 4.546875, 4.546875, false)),
    glyph("\\circeq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 5.890625, 6.25, 1.0625, 7.3125, 1.71875, 7.609375, 7.609375, false)),
    glyph("\\wedgeq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.40625, 6.25, 1.0625, 7.3125, 1.71875, 8.125, 8.125, false)),
    glyph("\\veeeq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.40625, 6.25, 1.0625, 7.3125, 1.71875, 8.125, 8.125, false)),
    glyph("\\stareq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.765625, 6.25, 1.0625, 7.3125, 1.71875, 8.484375, 8.484375, false)),
    glyph("\\triangleq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.8125, 6.25, 1.0625, 7.3125, 1.71875, 8.53125, 8.53125, false)),
    glyph("\\nequiv", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.75, 6.25, 1.0625, 7.3125, -0.25, 6.5, 6.5, false)),
    glyph("\\leqq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.203125, 6.265625, 1.0625, 7.328125, -0.828125, 6.375, 6.375, false)),
    glyph("\\geqq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.203125, 6.265625, 1.0625, 7.328125, -0.828125, 6.375, 6.375, false)),
    glyph("\\lneqq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 8.015625, 6.265625, 1.0625, 7.328125, -1.640625, 6.375, 6.375, false)),
    glyph("\\gneqq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 8.015625, 6.265625, 1.0625, 7.328125, -1.640625, 6.375, 6.375, false)),
    glyph("\\between", false, "default", 10.0, "rm", Metrics::new(4.638671875, 8.90625, 2.921875, 0.859375, 3.78125, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\nless", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.703125, 6.25, 1.0625, 7.3125, 0.03125, 6.734375, 6.734375, false)),
    glyph("\\ngtr", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.71875, 6.25, 1.0625, 7.3125, -0.46875, 6.25, 6.25, false)),
    glyph("\\nleq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.6875, 6.25, 1.0625, 7.3125, -1.015625, 6.671875, 6.671875, false)),
    glyph("\\ngeq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.6875, 6.25, 1.0625, 7.3125, -1.015625, 6.671875, 6.671875, false)),
    glyph("\\lesssim", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.375, 6.265625, 1.0625, 7.328125, -0.546875, 5.828125, 5.828125, false)),
    glyph("\\gtrsim", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.21875, 6.265625, 1.0625, 7.328125, -0.390625, 5.828125, 5.828125, false)),
    glyph("\\lessgtr", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.734375, 6.3125, 1.015625, 7.328125, -0.875, 6.859375, 6.859375, false)),
    glyph("\\gtrless", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.734375, 6.3125, 1.015625, 7.328125, -0.875, 6.859375, 6.859375, false)),
    glyph("\\preccurlyeq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.71875, 6.25, 1.0625, 7.3125, -1.046875, 6.671875, 6.671875, false)),
    glyph("\\succcurlyeq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.71875, 6.25, 1.0625, 7.3125, -1.046875, 6.671875, 6.671875, false)),
    glyph("\\precsim", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.515625, 6.25, 1.0625, 7.3125, -0.84375, 6.671875, 6.671875, false)),
    glyph("\\succsim", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.515625, 6.25, 1.0625, 7.3125, -0.84375, 6.671875, 6.671875, false)),
    glyph("\\nprec", false, "default", 10.0, "rm", Metrics::new(8.37890625, 8.25, 6.25, 1.0625, 7.3125, -0.609375, 7.640625, 7.640625, false)),
    glyph("\\nsucc", false, "default", 10.0, "rm", Metrics::new(8.37890625, 8.25, 6.25, 1.0625, 7.3125, -1.375, 6.875, 6.875, false)),
    glyph("\\nsubset", false, "default", 10.0, "rm", Metrics::new(8.37890625, 8.234375, 6.390625, 1.0, 7.390625, -0.96875, 7.265625, 7.265625, false)),
    glyph("\\nsupset", false, "default", 10.0, "rm", Metrics::new(8.37890625, 8.21875, 6.390625, 1.0, 7.390625, -1.0, 7.21875, 7.21875, false)),
    glyph("\\nsubseteq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 8.453125, 6.390625, 0.921875, 7.3125, -1.15625, 7.296875, 7.296875, false)),
    glyph("\\nsupseteq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 8.453125, 6.390625, 1.0625, 7.453125, -1.15625, 7.296875, 7.296875, false)),
    glyph("\\subsetneq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.875, 6.390625, 0.921875, 7.3125, -0.734375, 6.140625, 6.140625, false)),
    glyph("\\supsetneq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.875, 6.390625, 0.921875, 7.3125, -0.734375, 6.140625, 6.140625, false)),
    glyph("\\sqsubset", false, "default", 10.0, "rm", Metrics::new(8.37890625, 5.671875, 6.25, 1.0625, 7.3125, 0.0, 5.671875, 5.671875, false)),
    glyph("\\sqsupset", false, "default", 10.0, "rm", Metrics::new(8.37890625, 5.671875, 6.25, 1.0625, 7.3125, 0.0, 5.671875, 5.671875, false)),
    glyph("\\sqsubseteq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.125, 6.25, 1.0625, 7.3125, -0.828125, 6.296875, 6.296875, false)),
    glyph("\\sqsupseteq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.125, 6.25, 1.0625, 7.3125, -0.828125, 6.296875, 6.296875, false)),
    glyph("\\vDash", false, "default", 10.0, "rm", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\Vdash", false, "default", 10.0, "rm", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\Vvdash", false, "default", 10.0, "rm", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\VDash", false, "default", 10.0, "rm", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\nvdash", false, "default", 10.0, "rm", Metrics::new(8.7109375, 7.78125, 7.0, 0.859375, 7.859375, -0.390625, 7.390625, 7.390625, false)),
    glyph("\\nvDash", false, "default", 10.0, "rm", Metrics::new(8.7109375, 7.78125, 7.0, 0.859375, 7.859375, -0.390625, 7.390625, 7.390625, false)),
    glyph("\\nVdash", false, "default", 10.0, "rm", Metrics::new(8.7109375, 7.78125, 7.0, 0.859375, 7.859375, -0.390625, 7.390625, 7.390625, false)),
    glyph("\\nVDash", false, "default", 10.0, "rm", Metrics::new(8.7109375, 7.78125, 7.0, 0.859375, 7.859375, -0.390625, 7.390625, 7.390625, false)),
    glyph("\\vartriangleleft", false, "default", 10.0, "rm", Metrics::new(8.37890625, 5.984375, 6.25, 1.0625, 7.3125, 0.140625, 6.125, 6.125, false)),
    glyph("\\vartriangleright", false, "default", 10.0, "rm", Metrics::new(8.37890625, 5.984375, 6.25, 1.0625, 7.3125, 0.140625, 6.125, 6.125, false)),
    glyph("\\trianglelefteq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.21875, 6.25, 1.0625, 7.3125, -0.484375, 6.734375, 6.734375, false)),
    glyph("\\trianglerighteq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.21875, 6.25, 1.0625, 7.3125, -0.484375, 6.734375, 6.734375, false)),
    glyph("\\multimap", false, "default", 10.0, "rm", Metrics::new(8.37890625, 2.796875, 7.421875, 0.484375, 7.90625, 1.75, 4.546875, 4.546875, false)),
    glyph("\\backsimeq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 3.21875, 6.25, 1.0625, 7.3125, 1.71875, 4.9375, 4.9375, false)),
    glyph("\\Subset", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.328125, 6.390625, 0.921875, 7.3125, -0.03125, 6.296875, 6.296875, false)),
    glyph("\\Supset", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.328125, 6.390625, 1.0625, 7.453125, -0.03125, 6.296875, 6.296875, false)),
    glyph("\\pitchfork", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.296875, 4.671875, 1.859375, 6.53125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\lessdot", false, "default", 10.0, "rm", Metrics::new(8.37890625, 5.359375, 6.25, 1.0625, 7.3125, 0.453125, 5.8125, 5.8125, false)),
    glyph("\\gtrdot", false, "default", 10.0, "rm", Metrics::new(8.37890625, 5.359375, 6.25, 1.0625, 7.3125, 0.453125, 5.8125, 5.8125, false)),
    glyph("\\lll", false, "default", 10.0, "rm", Metrics::new(14.2236328125, 5.875, 12.78125, 0.71875, 13.5, 0.21875, 6.09375, 6.09375, false)),
    glyph("\\ggg", false, "default", 10.0, "rm", Metrics::new(14.2236328125, 5.875, 12.78125, 0.71875, 13.5, 0.21875, 6.09375, 6.09375, false)),
    glyph("\\lesseqgtr", false, "default", 10.0, "rm", Metrics::new(8.37890625, 10.8125, 6.25, 1.0625, 7.3125, -2.28125, 8.53125, 8.53125, false)),
    glyph("\\gtreqless", false, "default", 10.0, "rm", Metrics::new(8.37890625, 10.8125, 6.25, 1.0625, 7.3125, -2.28125, 8.53125, 8.53125, false)),
    glyph("\\curlyeqprec", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.71875, 6.25, 1.0625, 7.3125, -1.046875, 6.671875, 6.671875, false)),
    glyph("\\curlyeqsucc", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.71875, 6.25, 1.0625, 7.3125, -1.046875, 6.671875, 6.671875, false)),
    glyph("\\npreccurlyeq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 9.421875, 6.25, 1.0625, 7.3125, -1.78125, 7.640625, 7.640625, false)),
    glyph("\\nsucccurlyeq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 9.421875, 6.25, 1.0625, 7.3125, -1.78125, 7.640625, 7.640625, false)),
    glyph("\\nsqsubseteq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 9.078125, 6.25, 1.0625, 7.3125, -1.40625, 7.671875, 7.671875, false)),
    glyph("\\nsqsupseteq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 9.078125, 6.25, 1.0625, 7.3125, -1.40625, 7.671875, 7.671875, false)),
    glyph("\\lnsim", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.203125, 6.265625, 1.0625, 7.328125, -1.375, 5.828125, 5.828125, false)),
    glyph("\\gnsim", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.203125, 6.265625, 1.0625, 7.328125, -1.375, 5.828125, 5.828125, false)),
    glyph("\\precnsim", false, "default", 10.0, "rm", Metrics::new(8.37890625, 8.359375, 6.25, 1.0625, 7.3125, -1.6875, 6.671875, 6.671875, false)),
    glyph("\\succnsim", false, "default", 10.0, "rm", Metrics::new(8.37890625, 8.375, 6.265625, 1.09375, 7.359375, -1.703125, 6.671875, 6.671875, false)),
    glyph("\\ntriangleleft", false, "default", 10.0, "rm", Metrics::new(8.37890625, 8.859375, 6.25, 1.0625, 7.3125, -1.296875, 7.5625, 7.5625, false)),
    glyph("\\ntriangleright", false, "default", 10.0, "rm", Metrics::new(8.37890625, 8.859375, 6.25, 1.0625, 7.3125, -1.296875, 7.5625, 7.5625, false)),
    glyph("\\ntrianglelefteq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 10.046875, 6.25, 1.0625, 7.3125, -1.890625, 8.15625, 8.15625, false)),
    glyph("\\ntrianglerighteq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 10.046875, 6.25, 1.046875, 7.296875, -1.890625, 8.15625, 8.15625, false)),
    glyph("\\leqslant", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.046875, 6.25, 1.0625, 7.3125, -1.234375, 5.8125, 5.8125, false)),
    glyph("\\geqslant", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.046875, 6.25, 1.0625, 7.3125, -1.234375, 5.8125, 5.8125, false)),
    glyph("\\lessapprox", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.953125, 6.265625, 1.0625, 7.328125, -1.328125, 6.625, 6.625, false)),
    glyph("\\gtrapprox", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.953125, 6.265625, 1.0625, 7.328125, -1.328125, 6.625, 6.625, false)),
    glyph("\\lneq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.03125, 6.25, 1.0625, 7.3125, -1.203125, 5.828125, 5.828125, false)),
    glyph("\\gneq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.03125, 6.25, 1.0625, 7.3125, -1.203125, 5.828125, 5.828125, false)),
    glyph("\\lnapprox", false, "default", 10.0, "rm", Metrics::new(8.37890625, 8.65625, 6.265625, 1.0625, 7.328125, -2.03125, 6.625, 6.625, false)),
    glyph("\\gnapprox", false, "default", 10.0, "rm", Metrics::new(8.37890625, 8.65625, 6.265625, 1.0625, 7.328125, -2.03125, 6.625, 6.625, false)),
    glyph("\\lesseqqgtr", false, "default", 10.0, "rm", Metrics::new(8.37890625, 11.015625, 6.25, 1.0625, 7.3125, -3.109375, 7.90625, 7.90625, false)),
    glyph("\\gtreqqless", false, "default", 10.0, "rm", Metrics::new(8.37890625, 11.015625, 6.25, 1.0625, 7.3125, -3.109375, 7.90625, 7.90625, false)),
    glyph("\\eqslantless", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.046875, 6.25, 1.0625, 7.3125, -0.609375, 6.4375, 6.4375, false)),
    glyph("\\eqslantgtr", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.046875, 6.25, 1.0625, 7.3125, -0.609375, 6.4375, 6.4375, false)),
    glyph("\\preceq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.90625, 6.25, 1.0625, 7.3125, -0.234375, 6.671875, 6.671875, false)),
    glyph("\\succeq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.90625, 6.25, 1.0625, 7.3125, -0.234375, 6.671875, 6.671875, false)),
    glyph("\\precneqq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 8.5625, 6.25, 1.0625, 7.3125, -1.953125, 6.609375, 6.609375, false)),
    glyph("\\succneqq", false, "default", 10.0, "rm", Metrics::new(8.37890625, 8.5625, 6.25, 1.0625, 7.3125, -1.953125, 6.609375, 6.609375, false)),
    glyph("\\precapprox", false, "default", 10.0, "rm", Metrics::new(8.37890625, 8.828125, 6.25, 1.0625, 7.3125, -1.90625, 6.921875, 6.921875, false)),
    glyph("\\succapprox", false, "default", 10.0, "rm", Metrics::new(8.37890625, 8.828125, 6.25, 1.0625, 7.3125, -1.90625, 6.921875, 6.921875, false)),
    glyph("\\precnapprox", false, "default", 10.0, "rm", Metrics::new(8.37890625, 9.515625, 6.265625, 1.0625, 7.328125, -2.59375, 6.921875, 6.921875, false)),
    glyph("\\succnapprox", false, "default", 10.0, "rm", Metrics::new(8.37890625, 9.515625, 6.265625, 1.0625, 7.328125, -2.59375, 6.921875, 6.921875, false)),
    glyph("\\dotplus", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.296875, 6.25, 1.0625, 7.3125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\smallsetminus", false, "default", 10.0, "rm", Metrics::new(6.3671875, 8.21875, 3.375, 1.921875, 5.296875, -0.53125, 7.6875, 7.6875, false)),
    glyph("\\dotminus", false, "default", 10.0, "rm", Metrics::new(8.37890625, 2.796875, 6.25, 1.0625, 7.3125, 2.71875, 5.515625, 5.515625, false)),
    glyph("\\cupdot", false, "default", 10.0, "rm", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\circledcirc", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\circledast", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\circleddash", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\boxplus", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\boxminus", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\boxtimes", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\boxdot", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\intercal", false, "default", 10.0, "rm", Metrics::new(5.205078125, 7.0, 2.890625, 1.15625, 4.046875, 0.0, 7.0, 7.0, false)),
    glyph("\\veebar", false, "default", 10.0, "rm", Metrics::new(7.3193359375, 7.40625, 5.359375, 0.984375, 6.34375, 0.0, 7.40625, 7.40625, false)),
    glyph("\\barwedge", false, "default", 10.0, "rm", Metrics::new(7.3193359375, 7.40625, 5.359375, 0.984375, 6.34375, 0.0, 7.40625, 7.40625, false)),
    glyph("\\barvee", false, "default", 10.0, "rm", Metrics::new(7.3193359375, 7.40625, 5.359375, 0.984375, 6.34375, 0.0, 7.40625, 7.40625, false)),
    glyph("\\divideontimes", false, "default", 10.0, "rm", Metrics::new(8.37890625, 5.984375, 6.25, 1.0625, 7.3125, 0.140625, 6.125, 6.125, false)),
    glyph("\\ltimes", false, "default", 10.0, "rm", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\rtimes", false, "default", 10.0, "rm", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\leftthreetimes", false, "default", 10.0, "rm", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\rightthreetimes", false, "default", 10.0, "rm", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\curlyvee", false, "default", 10.0, "rm", Metrics::new(7.32421875, 5.796875, 6.359375, 0.484375, 6.84375, 0.0, 5.796875, 5.796875, false)),
    glyph("\\curlywedge", false, "default", 10.0, "rm", Metrics::new(7.32421875, 5.796875, 6.359375, 0.484375, 6.84375, 0.0, 5.796875, 5.796875, false)),
    glyph("\\Cap", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.625, 6.328125, 1.03125, 7.359375, 0.0, 6.625, 6.625, false)),
    glyph("\\Cup", false, "default", 10.0, "rm", Metrics::new(8.37890625, 6.625, 6.328125, 1.03125, 7.359375, -0.140625, 6.484375, 6.484375, false)),
    glyph("\\doublebarwedge", false, "default", 10.0, "rm", Metrics::new(8.37890625, 5.125, 4.28125, 2.046875, 6.328125, 0.0, 5.125, 5.125, false)),
    glyph("\\bigodot", false, "default", 10.0, "rm", Metrics::new(10.0, 9.453125, 9.4375, 0.28125, 9.71875, -1.984375, 7.46875, 7.46875, false)),
    glyph("\\oiint", false, "default", 10.0, "rm", Metrics::new(7.890625, 9.6875, 6.734375, 0.578125, 7.3125, -2.125, 7.5625, 7.5625, false)),
    glyph("\\oiiint", false, "default", 10.0, "rm", Metrics::new(10.5712890625, 9.6875, 9.421875, 0.578125, 10.0, -2.125, 7.5625, 7.5625, false)),
    glyph("\\iiiint", false, "default", 10.0, "rm", Metrics::new(13.251953125, 9.6875, 12.109375, 0.578125, 12.6875, -2.125, 7.5625, 7.5625, false)),
    glyph("\\minus", false, "default", 10.0, "rm", Metrics::new(8.37890625, 0.828125, 6.25, 1.0625, 7.3125, 2.71875, 3.546875, 3.546875, false)),
    glyph("\\cdotp", false, "default", 10.0, "rm", Metrics::new(3.1787109375, 1.234375, 1.03125, 1.0625, 2.09375, 2.859375, 4.09375, 4.09375, false)),
    glyph("\\hslash", false, "default", 10.0, "rm", Metrics::new(6.337890625, 7.59375, 5.4375, 0.4375, 5.875, 0.0, 7.59375, 7.59375, false)),
    glyph("\\beth", false, "default", 10.0, "rm", Metrics::new(6.73828125, 7.5625, 6.5625, -0.03125, 6.53125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\gimel", false, "default", 10.0, "rm", Metrics::new(4.658203125, 7.765625, 3.9375, 0.125, 4.0625, -0.34375, 7.421875, 7.421875, false)),
    glyph("\\daleth", false, "default", 10.0, "rm", Metrics::new(6.4453125, 7.765625, 5.484375, 0.421875, 5.90625, -0.34375, 7.421875, 7.421875, false)),
    glyph("\\mho", false, "default", 10.0, "rm", Metrics::new(7.6416015625, 7.375, 6.890625, 0.375, 7.265625, -0.140625, 7.234375, 7.234375, false)),
    glyph("\\eth", false, "default", 10.0, "rm", Metrics::new(6.1181640625, 7.734375, 5.03125, 0.546875, 5.578125, -0.140625, 7.59375, 7.59375, false)),
    glyph("\\Finv", false, "default", 10.0, "rm", Metrics::new(5.751953125, 7.296875, 4.1875, 0.984375, 5.171875, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Game", false, "default", 10.0, "rm", Metrics::new(7.7490234375, 7.5625, 6.359375, 0.796875, 7.15625, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\digamma", false, "default", 10.0, "rm", Metrics::new(4.5849609375, 9.671875, 5.03125, -0.9375, 4.09375, -2.078125, 7.59375, 7.59375, false)),
    glyph("\\varkappa", false, "default", 10.0, "rm", Metrics::new(6.6357421875, 5.5625, 5.453125, 0.546875, 6.0, -0.0625, 5.5, 5.5, false)),
    glyph("\\backepsilon", false, "default", 10.0, "rm", Metrics::new(6.15234375, 5.734375, 4.25, 0.953125, 5.203125, -0.140625, 5.59375, 5.59375, false)),
    glyph("\\AA", false, "default", 10.0, "rm", Metrics::new(6.8408203125, 9.28125, 6.6875, 0.078125, 6.765625, 0.0, 9.28125, 9.28125, false)),
    glyph("\\ae", false, "default", 10.0, "rm", Metrics::new(9.8193359375, 5.734375, 8.703125, 0.59375, 9.296875, -0.140625, 5.59375, 5.59375, false)),
    glyph("\\AE", false, "default", 10.0, "rm", Metrics::new(9.7412109375, 7.296875, 9.0625, 0.046875, 9.109375, 0.0, 7.296875, 7.296875, false)),
    glyph("\\oe", false, "default", 10.0, "rm", Metrics::new(10.2294921875, 5.734375, 9.15625, 0.546875, 9.703125, -0.140625, 5.59375, 5.59375, false)),
    glyph("\\OE", false, "default", 10.0, "rm", Metrics::new(10.6982421875, 7.296875, 9.5, 0.5625, 10.0625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\o", false, "default", 10.0, "rm", Metrics::new(6.1181640625, 6.375, 5.40625, 0.359375, 5.765625, -0.453125, 5.921875, 5.921875, false)),
    glyph("\\O", false, "default", 10.0, "rm", Metrics::new(7.87109375, 7.953125, 6.875, 0.5, 7.375, -0.34375, 7.609375, 7.609375, false)),
    glyph("\\ss", false, "default", 10.0, "rm", Metrics::new(6.298828125, 7.734375, 4.9375, 0.90625, 5.84375, -0.140625, 7.59375, 7.59375, false)),
    glyph("\\l", false, "default", 10.0, "rm", Metrics::new(2.841796875, 7.59375, 2.84375, 0.015625, 2.859375, 0.0, 7.59375, 7.59375, false)),
    glyph("\\L", false, "default", 10.0, "rm", Metrics::new(5.6201171875, 7.296875, 5.640625, -0.0625, 5.578125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\complement", false, "default", 10.0, "rm", Metrics::new(6.3623046875, 7.5625, 4.875, 0.65625, 5.53125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\nexists", false, "default", 10.0, "rm", Metrics::new(6.318359375, 8.21875, 4.6875, 0.984375, 5.671875, -0.453125, 7.765625, 7.765625, false)),
    glyph("\\varnothing", false, "default", 10.0, "rm", Metrics::new(8.7109375, 7.1875, 7.203125, 0.75, 7.953125, -0.09375, 7.09375, 7.09375, false)),
    glyph("\\smallin", false, "default", 10.0, "rm", Metrics::new(7.177734375, 4.75, 5.0625, 1.0625, 6.125, 0.75, 5.5, 5.5, false)),
    glyph("\\QED", false, "default", 10.0, "rm", Metrics::new(6.3623046875, 4.859375, 3.421875, 1.46875, 4.890625, 0.0, 4.859375, 4.859375, false)),
    glyph("\\measuredangle", false, "default", 10.0, "rm", Metrics::new(8.96484375, 7.828125, 7.0, 0.859375, 7.859375, -0.53125, 7.296875, 7.296875, false)),
    glyph("\\sphericalangle", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.296875, 6.171875, 1.15625, 7.328125, -0.03125, 7.265625, 7.265625, false)),
    glyph("\\rightangle", false, "default", 10.0, "rm", Metrics::new(8.37890625, 5.625, 5.625, 1.375, 7.0, 0.984375, 6.609375, 6.609375, false)),
    glyph("\\therefore", false, "default", 10.0, "rm", Metrics::new(6.3623046875, 5.046875, 5.171875, 0.59375, 5.765625, 1.0, 6.046875, 6.046875, false)),
    glyph("\\because", false, "default", 10.0, "rm", Metrics::new(6.3623046875, 5.046875, 5.171875, 0.59375, 5.765625, 1.0, 6.046875, 6.046875, false)),
    glyph("\\Colon", false, "default", 10.0, "rm", Metrics::new(6.3623046875, 5.046875, 5.171875, 0.59375, 5.765625, 1.0, 6.046875, 6.046875, false)),
    glyph("\\lnot", false, "default", 10.0, "rm", Metrics::new(8.37890625, 2.796875, 6.25, 1.0625, 7.3125, 1.40625, 4.203125, 4.203125, false)),
    glyph("\\sqrt", false, "default", 10.0, "rm", Metrics::new(6.3720703125, 8.3125, 6.078125, 0.296875, 6.375, -0.203125, 8.109375, 8.109375, false)),
    glyph("\\dots", false, "default", 10.0, "rm", Metrics::new(10.0, 1.234375, 7.6875, 1.15625, 8.84375, 0.0, 1.234375, 1.234375, false)),
    glyph("\\adots", false, "default", 10.0, "rm", Metrics::new(10.0, 8.078125, 7.6875, 1.15625, 8.84375, -0.921875, 7.15625, 7.15625, false)),
    glyph("\\ulcorner", false, "default", 10.0, "rm", Metrics::new(4.6875, 3.34375, 3.171875, 0.859375, 4.03125, 4.25, 7.59375, 7.59375, false)),
    glyph("\\urcorner", false, "default", 10.0, "rm", Metrics::new(4.6875, 3.34375, 3.171875, 0.65625, 3.828125, 4.25, 7.59375, 7.59375, false)),
    glyph("\\llcorner", false, "default", 10.0, "rm", Metrics::new(4.6875, 3.34375, 3.171875, 0.859375, 4.03125, -0.703125, 2.640625, 2.640625, false)),
    glyph("\\lrcorner", false, "default", 10.0, "rm", Metrics::new(4.6875, 3.34375, 3.171875, 0.65625, 3.828125, -0.703125, 2.640625, 2.640625, false)),
    glyph("\\lbrack", false, "default", 10.0, "rm", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.859375, 2.9375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rbrack", false, "default", 10.0, "rm", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.96875, 3.046875, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\leftparen", false, "default", 10.0, "rm", Metrics::new(3.9013671875, 8.90625, 2.234375, 0.859375, 3.09375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rightparen", false, "default", 10.0, "rm", Metrics::new(3.9013671875, 8.90625, 2.25, 0.796875, 3.046875, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\bigtriangleup", false, "default", 10.0, "rm", Metrics::new(7.6904296875, 7.65625, 7.625, 0.03125, 7.65625, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\vartriangle", false, "default", 10.0, "rm", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\blacktriangle", false, "default", 10.0, "rm", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\triangleright", false, "default", 10.0, "rm", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\blacktriangleright", false, "default", 10.0, "rm", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\bigtriangledown", false, "default", 10.0, "rm", Metrics::new(7.6904296875, 7.65625, 7.625, 0.03125, 7.65625, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\triangledown", false, "default", 10.0, "rm", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\blacktriangledown", false, "default", 10.0, "rm", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\triangleleft", false, "default", 10.0, "rm", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\blacktriangleleft", false, "default", 10.0, "rm", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\lozenge", false, "default", 10.0, "rm", Metrics::new(4.94140625, 10.40625, 4.875, 0.03125, 4.90625, -2.328125, 8.078125, 8.078125, false)),
    glyph("\\blacksquare", false, "default", 10.0, "rm", Metrics::new(9.4482421875, 7.65625, 7.640625, 0.90625, 8.546875, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\square", false, "default", 10.0, "rm", Metrics::new(9.4482421875, 7.65625, 7.640625, 0.90625, 8.546875, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\Box", false, "default", 10.0, "rm", Metrics::new(9.4482421875, 7.65625, 7.640625, 0.90625, 8.546875, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\bigstar", false, "default", 10.0, "rm", Metrics::new(8.96484375, 7.28125, 7.65625, 0.65625, 8.3125, -0.046875, 7.234375, 7.234375, false)),
    glyph("\\diagup", false, "default", 10.0, "rm", Metrics::new(6.0205078125, 11.6875, 6.890625, -0.4375, 6.453125, -2.40625, 9.28125, 9.28125, false)),
    glyph("\\diagdown", false, "default", 10.0, "rm", Metrics::new(6.0205078125, 11.6875, 6.890625, -0.4375, 6.453125, -2.40625, 9.28125, 9.28125, false)),
    glyph("\\varspadesuit", false, "default", 10.0, "rm", Metrics::new(8.96484375, 7.296875, 5.8125, 1.578125, 7.390625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\varheartsuit", false, "default", 10.0, "rm", Metrics::new(8.96484375, 7.28125, 7.1875, 0.890625, 8.078125, 0.0, 7.28125, 7.28125, false)),
    glyph("\\vardiamondsuit", false, "default", 10.0, "rm", Metrics::new(8.96484375, 7.28125, 5.59375, 1.6875, 7.28125, 0.0, 7.28125, 7.28125, false)),
    glyph("\\varclubsuit", false, "default", 10.0, "rm", Metrics::new(8.96484375, 7.328125, 6.75, 1.109375, 7.859375, 0.0, 7.328125, 7.328125, false)),
    glyph("\\checkmark", false, "default", 10.0, "rm", Metrics::new(8.37890625, 5.328125, 5.171875, 1.5, 6.671875, 0.96875, 6.296875, 6.296875, false)),
    glyph("\\maltese", false, "default", 10.0, "rm", Metrics::new(8.37890625, 7.296875, 7.28125, 0.546875, 7.828125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\sun", false, "default", 10.0, "rm", Metrics::new(8.96484375, 7.3125, 7.3125, 0.828125, 8.140625, 0.0, 7.3125, 7.3125, false)),
    glyph("\\mercury", false, "default", 10.0, "rm", Metrics::new(6.1376953125, 8.328125, 4.421875, 0.859375, 5.28125, -1.015625, 7.3125, 7.3125, false)),
    glyph("\\venus", false, "default", 10.0, "rm", Metrics::new(7.32421875, 8.5625, 5.609375, 0.859375, 6.46875, -1.25, 7.3125, 7.3125, false)),
    glyph("\\earth", false, "default", 10.0, "rm", Metrics::new(7.32421875, 8.5625, 5.609375, 0.859375, 6.46875, -0.140625, 8.421875, 8.421875, false)),
    glyph("\\mars", false, "default", 10.0, "rm", Metrics::new(8.96484375, 7.34375, 7.515625, 0.796875, 8.3125, -0.140625, 7.203125, 7.203125, false)),
    glyph("\\jupiter", false, "default", 10.0, "rm", Metrics::new(8.96484375, 7.3125, 5.640625, 1.65625, 7.296875, 0.0, 7.3125, 7.3125, false)),
    glyph("\\saturn", false, "default", 10.0, "rm", Metrics::new(8.96484375, 7.3125, 4.578125, 2.1875, 6.765625, 0.0, 7.3125, 7.3125, false)),
    glyph("\\uranus", false, "default", 10.0, "rm", Metrics::new(8.96484375, 7.3125, 6.53125, 1.21875, 7.75, 0.0, 7.3125, 7.3125, false)),
    glyph("\\neptune", false, "default", 10.0, "rm", Metrics::new(8.96484375, 7.3125, 6.421875, 1.265625, 7.6875, 0.0, 7.3125, 7.3125, false)),
    glyph("\\pluto", false, "default", 10.0, "rm", Metrics::new(8.96484375, 7.3125, 4.15625, 2.40625, 6.5625, 0.0, 7.3125, 7.3125, false)),
    glyph("\\male", false, "default", 10.0, "rm", Metrics::new(8.96484375, 7.34375, 7.515625, 0.796875, 8.3125, -0.140625, 7.203125, 7.203125, false)),
    glyph("\\female", false, "default", 10.0, "rm", Metrics::new(7.32421875, 8.5625, 5.609375, 0.859375, 6.46875, -1.25, 7.3125, 7.3125, false)),
    glyph("\\circledR", false, "default", 10.0, "rm", Metrics::new(10.0, 7.25, 7.25, 1.375, 8.625, 0.0, 7.25, 7.25, false)),
    glyph("\\yen", false, "default", 10.0, "rm", Metrics::new(6.3623046875, 7.296875, 5.546875, 0.40625, 5.953125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\sterling", false, "default", 10.0, "rm", Metrics::new(6.3623046875, 7.421875, 4.859375, 0.625, 5.484375, 0.0, 7.421875, 7.421875, false)),
    glyph("\\cent", false, "default", 10.0, "rm", Metrics::new(6.3623046875, 8.53125, 4.328125, 0.84375, 5.171875, -1.53125, 7.0, 7.0, false)),
    glyph("\\backprime", false, "default", 10.0, "rm", Metrics::new(2.2705078125, 1.828125, 1.828125, 0.203125, 2.03125, 5.46875, 7.296875, 7.296875, false)),
    glyph("\\dag", false, "default", 10.0, "rm", Metrics::new(5.0, 8.265625, 4.4375, 0.28125, 4.71875, -0.96875, 7.296875, 7.296875, false)),
    glyph("\\ddag", false, "default", 10.0, "rm", Metrics::new(5.0, 8.265625, 4.4375, 0.28125, 4.71875, -0.96875, 7.296875, 7.296875, false)),
    glyph("é", false, "default", 10.0, "rm", Metrics::new(6.15234375, 8.140625, 5.078125, 0.546875, 5.625, -0.140625, 8.0, 8.0, false)),
    glyph(" ", false, "default", 10.0, "rm", Metrics::new(3.1787109375, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, false)),
    glyph("a", false, "default", 12.0, "rm", Metrics::new(7.353515625, 6.890625, 5.546875, 0.71875, 6.265625, -0.171875, 6.71875, 6.71875, false)),
    glyph("b", false, "default", 12.0, "rm", Metrics::new(7.6171875, 9.296875, 5.875, 1.09375, 6.96875, -0.171875, 9.125, 9.125, false)),
    glyph("c", false, "default", 12.0, "rm", Metrics::new(6.59765625, 6.890625, 5.203125, 0.65625, 5.859375, -0.171875, 6.71875, 6.71875, false)),
    glyph("d", false, "default", 12.0, "rm", Metrics::new(7.6171875, 9.296875, 5.875, 0.65625, 6.53125, -0.171875, 9.125, 9.125, false)),
    glyph("e", false, "default", 12.0, "rm", Metrics::new(7.3828125, 6.890625, 6.09375, 0.65625, 6.75, -0.171875, 6.71875, 6.71875, false)),
    glyph("f", false, "default", 12.0, "rm", Metrics::new(4.224609375, 9.125, 4.171875, 0.28125, 4.453125, 0.0, 9.125, 9.125, false)),
    glyph("g", false, "default", 12.0, "rm", Metrics::new(7.6171875, 9.21875, 5.875, 0.65625, 6.53125, -2.5, 6.71875, 6.71875, false)),
    glyph("h", false, "default", 12.0, "rm", Metrics::new(7.60546875, 9.125, 5.5, 1.09375, 6.59375, 0.0, 9.125, 9.125, false)),
    glyph("i", false, "default", 12.0, "rm", Metrics::new(3.333984375, 9.125, 1.078125, 1.125, 2.203125, 0.0, 9.125, 9.125, false)),
    glyph("j", false, "default", 12.0, "rm", Metrics::new(3.333984375, 11.625, 2.421875, -0.21875, 2.203125, -2.5, 9.125, 9.125, false)),
    glyph("k", false, "default", 12.0, "rm", Metrics::new(6.94921875, 9.125, 5.828125, 1.09375, 6.921875, 0.0, 9.125, 9.125, false)),
    glyph("l", false, "default", 12.0, "rm", Metrics::new(3.333984375, 9.125, 1.078125, 1.125, 2.203125, 0.0, 9.125, 9.125, false)),
    glyph("m", false, "default", 12.0, "rm", Metrics::new(11.689453125, 6.71875, 9.578125, 1.09375, 10.671875, 0.0, 6.71875, 6.71875, false)),
    glyph("n", false, "default", 12.0, "rm", Metrics::new(7.60546875, 6.71875, 5.5, 1.09375, 6.59375, 0.0, 6.71875, 6.71875, false)),
    glyph("o", false, "default", 12.0, "rm", Metrics::new(7.341796875, 6.890625, 6.03125, 0.65625, 6.6875, -0.171875, 6.71875, 6.71875, false)),
    glyph("p", false, "default", 12.0, "rm", Metrics::new(7.6171875, 9.21875, 5.875, 1.09375, 6.96875, -2.5, 6.71875, 6.71875, false)),
    glyph("q", false, "default", 12.0, "rm", Metrics::new(7.6171875, 9.21875, 5.875, 0.65625, 6.53125, -2.5, 6.71875, 6.71875, false)),
    glyph("r", false, "default", 12.0, "rm", Metrics::new(4.93359375, 6.71875, 3.84375, 1.09375, 4.9375, 0.0, 6.71875, 6.71875, false)),
    glyph("s", false, "default", 12.0, "rm", Metrics::new(6.251953125, 6.890625, 5.015625, 0.65625, 5.671875, -0.171875, 6.71875, 6.71875, false)),
    glyph("t", false, "default", 12.0, "rm", Metrics::new(4.705078125, 8.421875, 4.09375, 0.328125, 4.421875, 0.0, 8.421875, 8.421875, false)),
    glyph("u", false, "default", 12.0, "rm", Metrics::new(7.60546875, 6.890625, 5.5, 1.015625, 6.515625, -0.171875, 6.71875, 6.71875, false)),
    glyph("v", false, "default", 12.0, "rm", Metrics::new(7.1015625, 6.5625, 6.390625, 0.359375, 6.75, 0.0, 6.5625, 6.5625, false)),
    glyph("w", false, "default", 12.0, "rm", Metrics::new(9.814453125, 6.5625, 8.8125, 0.5, 9.3125, 0.0, 6.5625, 6.5625, false)),
    glyph("x", false, "default", 12.0, "rm", Metrics::new(7.1015625, 6.5625, 6.359375, 0.34375, 6.703125, 0.0, 6.5625, 6.5625, false)),
    glyph("y", false, "default", 12.0, "rm", Metrics::new(7.1015625, 9.0625, 6.390625, 0.359375, 6.75, -2.5, 6.5625, 6.5625, false)),
    glyph("z", false, "default", 12.0, "rm", Metrics::new(6.298828125, 6.5625, 5.265625, 0.515625, 5.78125, 0.0, 6.5625, 6.5625, false)),
    glyph("A", false, "default", 12.0, "rm", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("B", false, "default", 12.0, "rm", Metrics::new(8.232421875, 8.75, 6.21875, 1.171875, 7.390625, 0.0, 8.75, 8.75, false)),
    glyph("C", false, "default", 12.0, "rm", Metrics::new(8.37890625, 9.078125, 7.0625, 0.671875, 7.734375, -0.171875, 8.90625, 8.90625, false)),
    glyph("D", false, "default", 12.0, "rm", Metrics::new(9.240234375, 8.75, 7.359375, 1.171875, 8.53125, 0.0, 8.75, 8.75, false)),
    glyph("E", false, "default", 12.0, "rm", Metrics::new(7.58203125, 8.75, 5.640625, 1.171875, 6.8125, 0.0, 8.75, 8.75, false)),
    glyph("F", false, "default", 12.0, "rm", Metrics::new(6.90234375, 8.75, 5.03125, 1.171875, 6.203125, 0.0, 8.75, 8.75, false)),
    glyph("G", false, "default", 12.0, "rm", Metrics::new(9.298828125, 9.078125, 7.640625, 0.671875, 8.3125, -0.171875, 8.90625, 8.90625, false)),
    glyph("H", false, "default", 12.0, "rm", Metrics::new(9.0234375, 8.75, 6.671875, 1.171875, 7.84375, 0.0, 8.75, 8.75, false)),
    glyph("I", false, "default", 12.0, "rm", Metrics::new(3.5390625, 8.75, 1.1875, 1.171875, 2.359375, 0.0, 8.75, 8.75, false)),
    glyph("J", false, "default", 12.0, "rm", Metrics::new(3.5390625, 11.15625, 2.984375, -0.625, 2.359375, -2.40625, 8.75, 8.75, false)),
    glyph("K", false, "default", 12.0, "rm", Metrics::new(7.869140625, 8.75, 6.953125, 1.171875, 8.125, 0.0, 8.75, 8.75, false)),
    glyph("L", false, "default", 12.0, "rm", Metrics::new(6.685546875, 8.75, 5.453125, 1.171875, 6.625, 0.0, 8.75, 8.75, false)),
    glyph("M", false, "default", 12.0, "rm", Metrics::new(10.353515625, 8.75, 8.015625, 1.171875, 9.1875, 0.0, 8.75, 8.75, false)),
    glyph("N", false, "default", 12.0, "rm", Metrics::new(8.9765625, 8.75, 6.625, 1.171875, 7.796875, 0.0, 8.75, 8.75, false)),
    glyph("O", false, "default", 12.0, "rm", Metrics::new(9.4453125, 9.078125, 8.09375, 0.671875, 8.765625, -0.171875, 8.90625, 8.90625, false)),
    glyph("P", false, "default", 12.0, "rm", Metrics::new(7.236328125, 8.75, 5.65625, 1.171875, 6.828125, 0.0, 8.75, 8.75, false)),
    glyph("Q", false, "default", 12.0, "rm", Metrics::new(9.4453125, 10.453125, 8.09375, 0.671875, 8.765625, -1.546875, 8.90625, 8.90625, false)),
    glyph("R", false, "default", 12.0, "rm", Metrics::new(8.337890625, 8.75, 6.828125, 1.171875, 8.0, 0.0, 8.75, 8.75, false)),
    glyph("S", false, "default", 12.0, "rm", Metrics::new(7.6171875, 9.078125, 6.15625, 0.796875, 6.953125, -0.171875, 8.90625, 8.90625, false)),
    glyph("T", false, "default", 12.0, "rm", Metrics::new(7.330078125, 8.75, 7.390625, -0.03125, 7.359375, 0.0, 8.75, 8.75, false)),
    glyph("U", false, "default", 12.0, "rm", Metrics::new(8.783203125, 8.921875, 6.6875, 1.046875, 7.734375, -0.171875, 8.75, 8.75, false)),
    glyph("V", false, "default", 12.0, "rm", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("W", false, "default", 12.0, "rm", Metrics::new(11.865234375, 8.75, 11.0625, 0.40625, 11.46875, 0.0, 8.75, 8.75, false)),
    glyph("X", false, "default", 12.0, "rm", Metrics::new(8.220703125, 8.75, 7.484375, 0.359375, 7.84375, 0.0, 8.75, 8.75, false)),
    glyph("Y", false, "default", 12.0, "rm", Metrics::new(7.330078125, 8.75, 7.375, -0.015625, 7.359375, 0.0, 8.75, 8.75, false)),
    glyph("Z", false, "default", 12.0, "rm", Metrics::new(8.220703125, 8.75, 7.140625, 0.546875, 7.6875, 0.0, 8.75, 8.75, false)),
    glyph("\\alpha", false, "default", 12.0, "rm", Metrics::new(7.91015625, 6.84375, 6.6875, 0.65625, 7.34375, -0.140625, 6.703125, 6.703125, false)),
    glyph("\\beta", false, "default", 12.0, "rm", Metrics::new(7.658203125, 11.6875, 5.671875, 1.125, 6.796875, -2.5, 9.1875, 9.1875, false)),
    glyph("\\gamma", false, "default", 12.0, "rm", Metrics::new(7.1015625, 9.0625, 6.5625, 0.1875, 6.75, -2.5, 6.5625, 6.5625, false)),
    glyph("\\delta", false, "default", 12.0, "rm", Metrics::new(7.341796875, 9.078125, 6.03125, 0.65625, 6.6875, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\epsilon", false, "default", 12.0, "rm", Metrics::new(7.3828125, 6.890625, 5.109375, 0.65625, 5.765625, -0.171875, 6.71875, 6.71875, false)),
    glyph("\\varepsilon", false, "default", 12.0, "rm", Metrics::new(6.486328125, 6.90625, 4.890625, 0.78125, 5.671875, -0.171875, 6.734375, 6.734375, false)),
    glyph("\\zeta", false, "default", 12.0, "rm", Metrics::new(6.52734375, 11.640625, 5.328125, 0.625, 5.953125, -2.515625, 9.125, 9.125, false)),
    glyph("\\eta", false, "default", 12.0, "rm", Metrics::new(7.60546875, 9.21875, 5.5, 1.09375, 6.59375, -2.5, 6.71875, 6.71875, false)),
    glyph("\\theta", false, "default", 12.0, "rm", Metrics::new(7.341796875, 9.359375, 6.03125, 0.65625, 6.6875, -0.140625, 9.21875, 9.21875, false)),
    glyph("\\vartheta", false, "default", 12.0, "rm", Metrics::new(7.4296875, 9.359375, 6.03125, 0.65625, 6.6875, -0.140625, 9.21875, 9.21875, false)),
    glyph("\\iota", false, "default", 12.0, "rm", Metrics::new(4.060546875, 6.5625, 2.671875, 0.96875, 3.640625, 0.0, 6.5625, 6.5625, false)),
    glyph("\\kappa", false, "default", 12.0, "rm", Metrics::new(7.072265625, 6.5625, 5.65625, 1.125, 6.78125, 0.0, 6.5625, 6.5625, false)),
    glyph("\\lambda", false, "default", 12.0, "rm", Metrics::new(7.1015625, 9.125, 6.390625, 0.359375, 6.75, 0.0, 9.125, 9.125, false)),
    glyph("\\mu", false, "default", 12.0, "rm", Metrics::new(7.634765625, 9.0625, 6.328125, 1.015625, 7.34375, -2.5, 6.5625, 6.5625, false)),
    glyph("\\nu", false, "default", 12.0, "rm", Metrics::new(6.703125, 6.5625, 5.703125, 0.4375, 6.140625, 0.0, 6.5625, 6.5625, false)),
    glyph("\\xi", false, "default", 12.0, "rm", Metrics::new(6.69140625, 11.640625, 5.375, 0.625, 6.0, -2.515625, 9.125, 9.125, false)),
    glyph("\\pi", false, "default", 12.0, "rm", Metrics::new(7.224609375, 6.796875, 6.453125, 0.4375, 6.890625, -0.234375, 6.5625, 6.5625, false)),
    glyph("\\varpi", false, "default", 12.0, "rm", Metrics::new(10.048828125, 6.734375, 9.265625, 0.375, 9.640625, -0.171875, 6.5625, 6.5625, false)),
    glyph("\\rho", false, "default", 12.0, "rm", Metrics::new(7.6171875, 9.21875, 5.875, 1.09375, 6.96875, -2.5, 6.71875, 6.71875, false)),
    glyph("\\varrho", false, "default", 12.0, "rm", Metrics::new(7.6171875, 9.21875, 5.875, 1.09375, 6.96875, -2.5, 6.71875, 6.71875, false)),
    glyph("\\sigma", false, "default", 12.0, "rm", Metrics::new(7.60546875, 6.734375, 6.59375, 0.65625, 7.25, -0.171875, 6.5625, 6.5625, false)),
    glyph("\\varsigma", false, "default", 12.0, "rm", Metrics::new(7.04296875, 9.234375, 5.203125, 0.65625, 5.859375, -2.515625, 6.71875, 6.71875, false)),
    glyph("\\tau", false, "default", 12.0, "rm", Metrics::new(7.224609375, 6.5625, 6.046875, 0.59375, 6.640625, 0.0, 6.5625, 6.5625, false)),
    glyph("\\upsilon", false, "default", 12.0, "rm", Metrics::new(6.943359375, 6.734375, 5.375, 0.875, 6.25, -0.171875, 6.5625, 6.5625, false)),
    glyph("\\phi", false, "default", 12.0, "rm", Metrics::new(7.916015625, 11.625, 6.5625, 0.65625, 7.21875, -2.5, 9.125, 9.125, false)),
    glyph("\\varphi", false, "default", 12.0, "rm", Metrics::new(7.916015625, 9.109375, 6.5625, 0.65625, 7.21875, -2.5, 6.609375, 6.609375, false)),
    glyph("\\chi", false, "default", 12.0, "rm", Metrics::new(6.931640625, 9.0625, 6.25, 0.34375, 6.59375, -2.5, 6.5625, 6.5625, false)),
    glyph("\\psi", false, "default", 12.0, "rm", Metrics::new(7.916015625, 9.0625, 6.5625, 0.65625, 7.21875, -2.5, 6.5625, 6.5625, false)),
    glyph("\\omega", false, "default", 12.0, "rm", Metrics::new(10.048828125, 6.734375, 8.4375, 0.796875, 9.234375, -0.171875, 6.5625, 6.5625, false)),
    glyph("\\Gamma", false, "default", 12.0, "rm", Metrics::new(6.685546875, 8.75, 5.453125, 1.171875, 6.625, 0.0, 8.75, 8.75, false)),
    glyph("\\Delta", false, "default", 12.0, "rm", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("\\Theta", false, "default", 12.0, "rm", Metrics::new(9.4453125, 9.078125, 8.09375, 0.671875, 8.765625, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\Lambda", false, "default", 12.0, "rm", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("\\Xi", false, "default", 12.0, "rm", Metrics::new(7.58203125, 8.75, 5.40625, 1.171875, 6.578125, 0.0, 8.75, 8.75, false)),
    glyph("\\Pi", false, "default", 12.0, "rm", Metrics::new(9.0234375, 8.75, 6.671875, 1.171875, 7.84375, 0.0, 8.75, 8.75, false)),
    glyph("\\Sigma", false, "default", 12.0, "rm", Metrics::new(7.58203125, 8.75, 5.640625, 1.171875, 6.8125, 0.0, 8.75, 8.75, false)),
    glyph("\\Upsilon", false, "default", 12.0, "rm", Metrics::new(7.330078125, 8.75, 7.375, -0.015625, 7.359375, 0.0, 8.75, 8.75, false)),
    glyph("\\Phi", false, "default", 12.0, "rm", Metrics::new(9.4453125, 8.75, 8.09375, 0.671875, 8.765625, 0.0, 8.75, 8.75, false)),
    glyph("\\Psi", false, "default", 12.0, "rm", Metrics::new(9.4453125, 8.75, 8.109375, 0.671875, 8.78125, 0.0, 8.75, 8.75, false)),
    glyph("\\Omega", false, "default", 12.0, "rm", Metrics::new(9.169921875, 8.859375, 8.265625, 0.453125, 8.71875, 0.0, 8.859375, 8.859375, false)),
    glyph("\\sum", false, "default", 12.0, "rm", Metrics::new(8.0859375, 10.921875, 7.703125, 0.140625, 7.84375, -2.296875, 8.625, 8.625, false)),
    glyph("\\prod", false, "default", 12.0, "rm", Metrics::new(9.08203125, 10.921875, 7.234375, 0.921875, 8.15625, -2.296875, 8.625, 8.625, false)),
    glyph("\\coprod", false, "default", 12.0, "rm", Metrics::new(9.08203125, 10.921875, 7.234375, 0.921875, 8.15625, -2.296875, 8.625, 8.625, false)),
    glyph("\\int", false, "default", 12.0, "rm", Metrics::new(6.251953125, 11.625, 4.875, 0.6875, 5.5625, -2.546875, 9.078125, 9.078125, true)),
    glyph("\\oint", false, "default", 12.0, "rm", Metrics::new(6.251953125, 11.625, 4.875, 0.6875, 5.5625, -2.546875, 9.078125, 9.078125, true)),
    glyph("\\iint", false, "default", 12.0, "rm", Metrics::new(9.46875, 11.625, 8.09375, 0.6875, 8.78125, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\iiint", false, "default", 12.0, "rm", Metrics::new(12.685546875, 11.625, 11.3125, 0.6875, 12.0, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\bigcap", false, "default", 12.0, "rm", Metrics::new(9.84375, 10.921875, 8.203125, 0.828125, 9.03125, -2.296875, 8.625, 8.625, false)),
    glyph("\\bigcup", false, "default", 12.0, "rm", Metrics::new(9.84375, 10.921875, 8.203125, 0.828125, 9.03125, -2.296875, 8.625, 8.625, false)),
    glyph("\\bigvee", false, "default", 12.0, "rm", Metrics::new(9.84375, 10.921875, 9.90625, -0.03125, 9.875, -2.296875, 8.625, 8.625, false)),
    glyph("\\bigwedge", false, "default", 12.0, "rm", Metrics::new(9.84375, 10.921875, 9.90625, -0.03125, 9.875, -2.296875, 8.625, 8.625, false)),
    glyph("\\bigoplus", false, "default", 12.0, "rm", Metrics::new(12.0, 11.34375, 11.3125, 0.34375, 11.65625, -2.375, 8.96875, 8.96875, false)),
    glyph("\\bigotimes", false, "default", 12.0, "rm", Metrics::new(12.0, 11.34375, 11.3125, 0.34375, 11.65625, -2.375, 8.96875, 8.96875, false)),
    glyph("\\pm", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.53125, 7.515625, 1.265625, 8.78125, 0.0, 7.53125, 7.53125, false)),
    glyph("\\mp", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.53125, 7.515625, 1.265625, 8.78125, 0.0, 7.53125, 7.53125, false)),
    glyph("\\times", false, "default", 12.0, "rm", Metrics::new(10.0546875, 6.78125, 6.78125, 1.640625, 8.421875, 0.375, 7.15625, 7.15625, false)),
    glyph("\\div", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.78125, 7.515625, 1.265625, 8.78125, 0.875, 6.65625, 6.65625, false)),
    glyph("\\cdot", false, "default", 12.0, "rm", Metrics::new(3.814453125, 1.484375, 1.234375, 1.28125, 2.515625, 3.421875, 4.90625, 4.90625, false)),
    glyph("\\ast", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.53125, 7.0, 1.53125, 8.53125, 0.0, 7.53125, 7.53125, false)),
    glyph("\\star", false, "default", 12.0, "rm", Metrics::new(7.51171875, 4.359375, 4.59375, 1.453125, 6.046875, 1.78125, 6.140625, 6.140625, false)),
    glyph("\\circ", false, "default", 12.0, "rm", Metrics::new(7.51171875, 3.71875, 3.703125, 1.90625, 5.609375, 1.921875, 5.640625, 5.640625, false)),
    glyph("\\bullet", false, "default", 12.0, "rm", Metrics::new(7.51171875, 3.46875, 3.484375, 2.015625, 5.5, 2.015625, 5.484375, 5.484375, false)),
    glyph("\\cap", false, "default", 12.0, "rm", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\cup", false, "default", 12.0, "rm", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\uplus", false, "default", 12.0, "rm", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.03125, 6.984375, 6.984375, false)),
    glyph("\\sqcap", false, "default", 12.0, "rm", Metrics::new(9.36328125, 7.515625, 6.828125, 1.265625, 8.09375, 0.0, 7.515625, 7.515625, false)),
    glyph("\\sqcup", false, "default", 12.0, "rm", Metrics::new(9.36328125, 7.515625, 6.828125, 1.265625, 8.09375, 0.0, 7.515625, 7.515625, false)),
    glyph("\\vee", false, "default", 12.0, "rm", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\wedge", false, "default", 12.0, "rm", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\setminus", false, "default", 12.0, "rm", Metrics::new(7.640625, 9.859375, 4.046875, 2.3125, 6.359375, -0.640625, 9.21875, 9.21875, false)),
    glyph("\\wr", false, "default", 12.0, "rm", Metrics::new(4.5, 7.515625, 2.0625, 1.21875, 3.28125, 0.0, 7.515625, 7.515625, false)),
    glyph("\\diamond", false, "default", 12.0, "rm", Metrics::new(7.51171875, 5.984375, 5.984375, 0.765625, 6.75, 0.765625, 6.75, 6.75, false)),
    glyph("\\oplus", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\ominus", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\otimes", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\oslash", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\odot", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\bigcirc", false, "default", 12.0, "rm", Metrics::new(10.470703125, 9.234375, 9.15625, 0.65625, 9.8125, -1.5, 7.734375, 7.734375, false)),
    glyph("\\dagger", false, "default", 12.0, "rm", Metrics::new(6.0, 9.90625, 5.34375, 0.328125, 5.671875, -1.15625, 8.75, 8.75, false)),
    glyph("\\ddagger", false, "default", 12.0, "rm", Metrics::new(6.0, 9.90625, 5.34375, 0.328125, 5.671875, -1.15625, 8.75, 8.75, false)),
    glyph("\\leq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 6.984375, 7.515625, 1.265625, 8.78125, 0.0, 6.984375, 6.984375, false)),
    glyph("\\geq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 6.984375, 7.515625, 1.265625, 8.78125, 0.0, 6.984375, 6.984375, false)),
    glyph("\\neq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.0625, 7.515625, 1.265625, 8.78125, 0.234375, 7.296875, 7.296875, false)),
    glyph("\\equiv", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.375, 7.515625, 1.265625, 8.78125, 1.078125, 6.453125, 6.453125, false)),
    glyph("\\sim", false, "default", 12.0, "rm", Metrics::new(10.0546875, 2.0625, 7.515625, 1.265625, 8.78125, 2.734375, 4.796875, 4.796875, false)),
    glyph("\\simeq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 3.875, 7.515625, 1.265625, 8.78125, 2.0625, 5.9375, 5.9375, false)),
    glyph("\\approx", false, "default", 12.0, "rm", Metrics::new(10.0546875, 4.34375, 7.515625, 1.265625, 8.78125, 1.59375, 5.9375, 5.9375, false)),
    glyph("\\cong", false, "default", 12.0, "rm", Metrics::new(10.0546875, 6.046875, 7.515625, 1.265625, 8.78125, 1.078125, 7.125, 7.125, false)),
    glyph("\\propto", false, "default", 12.0, "rm", Metrics::new(8.572265625, 4.5, 5.984375, 1.296875, 7.28125, 1.34375, 5.84375, 5.84375, false)),
    glyph("\\subset", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.609375, 7.65625, 1.203125, 8.859375, 0.953125, 6.5625, 6.5625, false)),
    glyph("\\supset", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.609375, 7.65625, 1.203125, 8.859375, 0.953125, 6.5625, 6.5625, false)),
    glyph("\\subseteq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.359375, 7.671875, 1.109375, 8.78125, 0.0, 7.359375, 7.359375, false)),
    glyph("\\supseteq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.359375, 7.671875, 1.265625, 8.9375, 0.0, 7.359375, 7.359375, false)),
    glyph("\\in", false, "default", 12.0, "rm", Metrics::new(10.453125, 8.625, 8.390625, 1.03125, 9.421875, -0.109375, 8.515625, 8.515625, false)),
    glyph("\\ni", false, "default", 12.0, "rm", Metrics::new(10.453125, 8.625, 8.390625, 1.03125, 9.421875, -0.109375, 8.515625, 8.515625, false)),
    glyph("\\notin", false, "default", 12.0, "rm", Metrics::new(10.453125, 11.6875, 8.390625, 1.03125, 9.421875, -1.65625, 10.03125, 10.03125, false)),
    glyph("\\ll", false, "default", 12.0, "rm", Metrics::new(12.5625, 7.046875, 10.828125, 0.875, 11.703125, 0.265625, 7.3125, 7.3125, false)),
    glyph("\\gg", false, "default", 12.0, "rm", Metrics::new(12.5625, 7.046875, 10.828125, 0.875, 11.703125, 0.265625, 7.3125, 7.3125, false)),
    glyph("\\prec", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.421875, 7.515625, 1.265625, 8.78125, -0.453125, 7.96875, 7.96875, false)),
    glyph("\\succ", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.421875, 7.515625, 1.265625, 8.78125, -0.453125, 7.96875, 7.96875, false)),
    glyph("\\mid", false, "default", 12.0, "rm", Metrics::new(6.0, 11.8125, 0.9375, 2.53125, 3.46875, -2.5625, 9.25, 9.25, false)),
    glyph("\\parallel", false, "default", 12.0, "rm", Metrics::new(6.0, 11.8125, 2.8125, 1.59375, 4.40625, -2.5625, 9.25, 9.25, false)),
    glyph("\\vdash", false, "default", 12.0, "rm", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\dashv", false, "default", 12.0, "rm", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\models", false, "default", 12.0, "rm", Metrics::new(6.24609375, 8.40625, 4.203125, 1.03125, 5.234375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\asymp", false, "default", 12.0, "rm", Metrics::new(10.0546875, 4.984375, 7.515625, 1.265625, 8.78125, 1.265625, 6.25, 6.25, false)),
    glyph("\\doteq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.4375, 7.515625, 1.265625, 8.78125, 2.0625, 7.5, 7.5, false)),
    glyph("\\bowtie", false, "default", 12.0, "rm", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\leftarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\rightarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\uparrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.796875, 5.140625, 2.453125, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\downarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.796875, 5.140625, 2.453125, 7.59375, -0.046875, 8.75, 8.75, false)),
    glyph("\\leftrightarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.875, 0.59375, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\updownarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.890625, 5.140625, 2.453125, 7.59375, -0.09375, 8.796875, 8.796875, false)),
    glyph("\\Leftarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Rightarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Uparrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.796875, 5.125, 2.46875, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\Downarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.796875, 5.125, 2.46875, 7.59375, -0.046875, 8.75, 8.75, false)),
    glyph("\\Leftrightarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.875, 0.59375, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Updownarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.890625, 5.125, 2.46875, 7.59375, -0.09375, 8.796875, 8.796875, false)),
    glyph("\\mapsto", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\longleftarrow", false, "default", 12.0, "rm", Metrics::new(17.203125, 5.125, 15.921875, 0.59375, 16.515625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\longrightarrow", false, "default", 12.0, "rm", Metrics::new(17.203125, 5.125, 15.9375, 0.6875, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\hookleftarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.578125, 8.765625, 0.59375, 9.359375, 1.203125, 6.78125, 6.78125, false)),
    glyph("\\hookrightarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.578125, 8.78125, 0.6875, 9.46875, 1.203125, 6.78125, 6.78125, false)),
    glyph("\\nearrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 6.734375, 6.75, 1.6875, 8.4375, 0.3125, 7.046875, 7.046875, false)),
    glyph("\\searrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 6.734375, 6.75, 1.6875, 8.4375, 0.3125, 7.046875, 7.046875, false)),
    glyph("\\swarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 6.734375, 6.75, 1.6875, 8.4375, 0.3125, 7.046875, 7.046875, false)),
    glyph("\\nwarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 6.734375, 6.75, 1.6875, 8.4375, 0.3125, 7.046875, 7.046875, false)),
    glyph("\\leftharpoonup", false, "default", 12.0, "rm", Metrics::new(10.0546875, 3.0625, 8.78125, 0.59375, 9.375, 3.265625, 6.328125, 6.328125, false)),
    glyph("\\rightharpoonup", false, "default", 12.0, "rm", Metrics::new(10.0546875, 3.0625, 8.78125, 0.6875, 9.46875, 3.265625, 6.328125, 6.328125, false)),
    glyph("\\rightleftharpoons", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.359375, 8.875, 0.59375, 9.46875, 0.078125, 7.4375, 7.4375, false)),
    glyph("\\infty", false, "default", 12.0, "rm", Metrics::new(9.99609375, 4.5, 7.40625, 1.296875, 8.703125, 1.34375, 5.84375, 5.84375, false)),
    glyph("\\partial", false, "default", 12.0, "rm", Metrics::new(6.205078125, 8.125, 5.09375, 0.5625, 5.65625, -0.171875, 7.953125, 7.953125, false)),
    glyph("\\nabla", false, "default", 12.0, "rm", Metrics::new(8.02734375, 8.625, 8.09375, -0.03125, 8.0625, 0.0, 8.625, 8.625, false)),
    glyph("\\forall", false, "default", 12.0, "rm", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("\\exists", false, "default", 12.0, "rm", Metrics::new(7.58203125, 8.75, 5.640625, 1.171875, 6.8125, 0.0, 8.75, 8.75, false)),
    glyph("\\neg", false, "default", 12.0, "rm", Metrics::new(10.0546875, 3.359375, 7.515625, 1.265625, 8.78125, 1.6875, 5.046875, 5.046875, false)),
    glyph("\\emptyset", false, "default", 12.0, "rm", Metrics::new(10.453125, 8.625, 8.640625, 0.90625, 9.546875, -0.109375, 8.515625, 8.515625, false)),
    glyph("\\aleph", false, "default", 12.0, "rm", Metrics::new(8.94140625, 9.078125, 7.9375, 0.609375, 8.546875, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\hbar", false, "default", 12.0, "rm", Metrics::new(8.337890625, 9.125, 6.234375, 0.703125, 6.9375, 0.0, 9.125, 9.125, false)),
    glyph("\\ell", false, "default", 12.0, "rm", Metrics::new(4.95703125, 9.078125, 4.390625, -0.15625, 4.234375, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\wp", false, "default", 12.0, "rm", Metrics::new(8.3671875, 8.59375, 7.25, 0.640625, 7.890625, -2.65625, 5.9375, 5.9375, false)),
    glyph("\\Re", false, "default", 12.0, "rm", Metrics::new(9.767578125, 9.078125, 9.15625, 0.484375, 9.640625, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\Im", false, "default", 12.0, "rm", Metrics::new(8.3671875, 9.078125, 7.28125, 0.625, 7.90625, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\prime", false, "default", 12.0, "rm", Metrics::new(2.724609375, 2.1875, 2.203125, 0.234375, 2.4375, 6.5625, 8.75, 8.75, false)),
    glyph("\\angle", false, "default", 12.0, "rm", Metrics::new(10.7578125, 8.75, 8.390625, 1.03125, 9.421875, 0.0, 8.75, 8.75, false)),
    glyph("\\triangle", false, "default", 12.0, "rm", Metrics::new(9.228515625, 9.1875, 9.15625, 0.03125, 9.1875, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\surd", false, "default", 12.0, "rm", Metrics::new(7.646484375, 9.96875, 7.28125, 0.359375, 7.640625, -0.234375, 9.734375, 9.734375, false)),
    glyph("\\top", false, "default", 12.0, "rm", Metrics::new(10.453125, 8.40625, 8.390625, 1.03125, 9.421875, 0.0, 8.40625, 8.40625, false)),
    glyph("\\bot", false, "default", 12.0, "rm", Metrics::new(10.453125, 8.40625, 8.390625, 1.03125, 9.421875, 0.0, 8.40625, 8.40625, false)),
    glyph("\\flat", false, "default", 12.0, "rm", Metrics::new(5.66015625, 8.796875, 3.640625, 1.0625, 4.703125, -0.03125, 8.765625, 8.765625, false)),
    glyph("\\natural", false, "default", 12.0, "rm", Metrics::new(4.2890625, 8.765625, 2.265625, 1.015625, 3.28125, 0.0, 8.765625, 8.765625, false)),
    glyph("\\sharp", false, "default", 12.0, "rm", Metrics::new(5.806640625, 8.765625, 3.796875, 1.015625, 4.8125, 0.0, 8.765625, 8.765625, false)),
    glyph("\\clubsuit", false, "default", 12.0, "rm", Metrics::new(10.7578125, 8.75, 8.078125, 1.34375, 9.421875, 0.0, 8.75, 8.75, false)),
    glyph("\\diamondsuit", false, "default", 12.0, "rm", Metrics::new(10.7578125, 8.75, 6.71875, 2.015625, 8.734375, 0.0, 8.75, 8.75, false)),
    glyph("\\heartsuit", false, "default", 12.0, "rm", Metrics::new(10.7578125, 8.71875, 8.59375, 1.078125, 9.671875, 0.0, 8.71875, 8.71875, false)),
    glyph("\\spadesuit", false, "default", 12.0, "rm", Metrics::new(10.7578125, 8.75, 6.96875, 1.890625, 8.859375, 0.0, 8.75, 8.75, false)),
    glyph("\\ldots", false, "default", 12.0, "rm", Metrics::new(12.0, 1.484375, 9.234375, 1.390625, 10.625, 0.0, 1.484375, 1.484375, false)),
    glyph("\\cdots", false, "default", 12.0, "rm", Metrics::new(12.0, 1.5, 9.21875, 1.390625, 10.609375, 2.984375, 4.484375, 4.484375, false)),
    glyph("\\vdots", false, "default", 12.0, "rm", Metrics::new(12.0, 9.6875, 1.234375, 5.375, 6.609375, -1.109375, 8.578125, 8.578125, false)),
    glyph("\\ddots", false, "default", 12.0, "rm", Metrics::new(12.0, 9.6875, 9.21875, 1.390625, 10.609375, -1.109375, 8.578125, 8.578125, false)),
    glyph("\\langle", false, "default", 12.0, "rm", Metrics::new(4.681640625, 10.6875, 2.640625, 1.078125, 3.71875, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\rangle", false, "default", 12.0, "rm", Metrics::new(4.681640625, 10.6875, 2.640625, 0.96875, 3.609375, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\lfloor", false, "default", 12.0, "rm", Metrics::new(4.681640625, 10.703125, 2.484375, 1.03125, 3.515625, -1.578125, 9.125, 9.125, false)),
    glyph("\\rfloor", false, "default", 12.0, "rm", Metrics::new(4.681640625, 10.703125, 2.484375, 1.171875, 3.65625, -1.578125, 9.125, 9.125, false)),
    glyph("\\lceil", false, "default", 12.0, "rm", Metrics::new(4.681640625, 10.703125, 2.484375, 1.03125, 3.515625, -1.578125, 9.125, 9.125, false)),
    glyph("\\rceil", false, "default", 12.0, "rm", Metrics::new(4.681640625, 10.703125, 2.484375, 1.171875, 3.65625, -1.578125, 9.125, 9.125, false)),
    glyph("\\lbrace", false, "default", 12.0, "rm", Metrics::new(7.634765625, 11.078125, 4.640625, 1.5, 6.140625, -1.953125, 9.125, 9.125, false)),
    glyph("\\rbrace", false, "default", 12.0, "rm", Metrics::new(7.634765625, 11.078125, 4.640625, 1.5, 6.140625, -1.953125, 9.125, 9.125, false)),
    glyph("\\vert", false, "default", 12.0, "rm", Metrics::new(4.04296875, 12.0, 0.984375, 1.53125, 2.515625, -2.828125, 9.171875, 9.171875, false)),
    glyph("\\Vert", false, "default", 12.0, "rm", Metrics::new(6.0, 12.0, 2.921875, 1.53125, 4.453125, -2.828125, 9.171875, 9.171875, false)),
    glyph("\\backslash", false, "default", 12.0, "rm", Metrics::new(4.04296875, 9.859375, 4.046875, 0.0, 4.046875, -1.109375, 8.75, 8.75, false)),
    glyph("\\S", false, "default", 12.0, "rm", Metrics::new(6.0, 10.046875, 4.90625, 0.546875, 5.453125, -1.140625, 8.90625, 8.90625, false)),
    glyph("\\P", false, "default", 12.0, "rm", Metrics::new(7.634765625, 9.90625, 5.40625, 0.921875, 6.328125, -1.15625, 8.75, 8.75, false)),
    glyph("\\copyright", false, "default", 12.0, "rm", Metrics::new(12.0, 8.703125, 8.6875, 1.65625, 10.34375, 0.0, 8.703125, 8.703125, false)),
    glyph("\\degree", false, "default", 12.0, "rm", Metrics::new(6.0, 3.71875, 3.71875, 1.140625, 4.859375, 5.1875, 8.90625, 8.90625, false)),
    glyph("\\imath", false, "default", 12.0, "rm", Metrics::new(3.333984375, 6.71875, 1.078125, 1.125, 2.203125, 0.0, 6.71875, 6.71875, false)),
    glyph("\\jmath", false, "default", 12.0, "rm", Metrics::new(3.333984375, 9.0625, 2.421875, -0.21875, 2.203125, -2.5, 6.5625, 6.5625, false)),
    glyph("\\nleftarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\nrightarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\twoheadleftarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\twoheadrightarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\leftarrowtail", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\rightarrowtail", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\mapsfrom", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\mapsup", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.796875, 5.125, 2.46875, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\mapsdown", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.796875, 5.125, 2.46875, 7.59375, -0.046875, 8.75, 8.75, false)),
    glyph("\\looparrowleft", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.578125, 8.765625, 0.59375, 9.359375, 1.203125, 6.78125, 6.78125, false)),
    glyph("\\looparrowright", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.578125, 8.78125, 0.6875, 9.46875, 1.203125, 6.78125, 6.78125, false)),
    glyph("\\leftrightsquigarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.875, 0.59375, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\nleftrightarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.296875, 8.875, 0.59375, 9.46875, 1.109375, 6.40625, 6.40625, false)),
    glyph("\\Lsh", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.921875, 5.515625, 2.03125, 7.546875, 0.0, 8.921875, 8.921875, false)),
    glyph("\\Rsh", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.921875, 5.515625, 2.515625, 8.03125, 0.0, 8.921875, 8.921875, false)),
    glyph("\\curvearrowleft", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.578125, 9.328125, 0.265625, 9.59375, 2.4375, 8.015625, 8.015625, false)),
    glyph("\\curvearrowright", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.578125, 9.328125, 0.46875, 9.796875, 2.4375, 8.015625, 8.015625, false)),
    glyph("\\circlearrowleft", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.40625, 7.90625, 1.234375, 9.140625, 0.75, 8.15625, 8.15625, false)),
    glyph("\\circlearrowright", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.40625, 7.90625, 0.921875, 8.828125, 0.75, 8.15625, 8.15625, false)),
    glyph("\\leftharpoondown", false, "default", 12.0, "rm", Metrics::new(10.0546875, 3.0625, 8.78125, 0.59375, 9.375, 1.203125, 4.265625, 4.265625, false)),
    glyph("\\upharpoonright", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.796875, 3.0625, 4.53125, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\upharpoonleft", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.796875, 3.078125, 2.453125, 5.53125, 0.0, 8.796875, 8.796875, false)),
    glyph("\\rightharpoondown", false, "default", 12.0, "rm", Metrics::new(10.0546875, 3.0625, 8.78125, 0.6875, 9.46875, 1.203125, 4.265625, 4.265625, false)),
    glyph("\\downharpoonright", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.796875, 3.0625, 4.53125, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\downharpoonleft", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.796875, 3.078125, 2.453125, 5.53125, 0.0, 8.796875, 8.796875, false)),
    glyph("\\rightleftarrows", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.65625, 8.875, 0.59375, 9.46875, -0.5625, 8.09375, 8.09375, false)),
    glyph("\\leftrightarrows", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.65625, 8.875, 0.59375, 9.46875, -0.5625, 8.09375, 8.09375, false)),
    glyph("\\leftleftarrows", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.65625, 8.78125, 0.59375, 9.375, -0.5625, 8.09375, 8.09375, false)),
    glyph("\\upuparrows", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.796875, 8.65625, 0.703125, 9.359375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\rightrightarrows", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.65625, 8.78125, 0.6875, 9.46875, -0.5625, 8.09375, 8.09375, false)),
    glyph("\\downdownarrows", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.796875, 8.65625, 0.703125, 9.359375, -0.046875, 8.75, 8.75, false)),
    glyph("\\leftrightharpoons", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.359375, 8.875, 0.59375, 9.46875, 0.078125, 7.4375, 7.4375, false)),
    glyph("\\nLeftarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\nLeftrightarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.265625, 8.875, 0.59375, 9.46875, 1.125, 6.390625, 6.390625, false)),
    glyph("\\nRightarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Lleftarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Rrightarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\leftsquigarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\rightsquigarrow", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\longleftrightarrow", false, "default", 12.0, "rm", Metrics::new(17.203125, 5.125, 16.03125, 0.59375, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Longleftarrow", false, "default", 12.0, "rm", Metrics::new(17.203125, 5.125, 15.921875, 0.59375, 16.515625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Longrightarrow", false, "default", 12.0, "rm", Metrics::new(17.203125, 5.125, 15.9375, 0.6875, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Longleftrightarrow", false, "default", 12.0, "rm", Metrics::new(17.203125, 5.125, 16.03125, 0.59375, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\longmapsto", false, "default", 12.0, "rm", Metrics::new(17.203125, 5.125, 15.9375, 0.6875, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\nmid", false, "default", 12.0, "rm", Metrics::new(6.0, 11.8125, 4.8125, 0.59375, 5.40625, -2.5625, 9.25, 9.25, false)),
    glyph("\\nparallel", false, "default", 12.0, "rm", Metrics::new(6.0, 11.8125, 4.8125, 0.59375, 5.40625, -2.5625, 9.25, 9.25, false)),
    glyph("\\backsim", false, "default", 12.0, "rm", Metrics::new(10.0546875, 2.0625, 7.515625, 1.265625, 8.78125, 2.734375, 4.796875, 4.796875, false)),
    glyph("\\nsim", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.71875, 7.515625, 1.265625, 8.78125, 0.921875, 6.640625, 6.640625, false)),
    glyph("\\eqsim", false, "default", 12.0, "rm", Metrics::new(10.0546875, 3.859375, 7.515625, 1.265625, 8.78125, 1.59375, 5.453125, 5.453125, false)),
    glyph("\\ncong", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.953125, 7.515625, 1.265625, 8.78125, -0.0625, 7.890625, 7.890625, false)),
    glyph("\\napprox", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.46875, 7.515625, 1.265625, 8.78125, 0.03125, 7.5, 7.5, false)),
    glyph("\\approxeq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 6.09375, 7.515625, 1.265625, 8.78125, 1.078125, 7.171875, 7.171875, false)),
    glyph("\\allequal", false, "default", 12.0, "rm", Metrics::new(10.0546875, 6.046875, 7.515625, 1.265625, 8.78125, 1.078125, 7.125, 7.125, false)),
    glyph("\\Bumpeq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 6.890625, 7.515625, 1.265625, 8.78125, 0.3125, 7.203125, 7.203125, false)),
    glyph("\\bumpeq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 5.140625, 7.515625, 1.265625, 8.78125, 2.0625, 7.203125, 7.203125, false)),
    glyph("\\Doteq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.484375, 7.515625, 1.265625, 8.78125, 0.015625, 7.5, 7.5, false)),
    glyph("\\fallingdotseq", false, "default", 12.0, "rm", Metrics::new(10.06640625, 7.46875, 7.53125, 1.265625, 8.796875, 0.03125, 7.5, 7.5, false)),
    glyph("\\risingdotseq", false, "default", 12.0, "rm", Metrics::new(10.06640625, 7.46875, 7.53125, 1.265625, 8.796875, 0.03125, 7.5, 7.5, false)),
    glyph("\\coloneq", false, "default", 12.0, "rm", Metrics::new(12.0, 3.90625, 9.578125, 1.21875, 10.796875, 1.8125, 5.71875, 5.71875, false)),
    glyph("\\eqcolon", false, "default", 12.0, "rm", Metrics::new(12.0, 3.890625, 9.59375, 1.203125, 10.796875, 1.8125, 5.703125, 5.703125, false)),
    glyph("\\eqcirc", false, "default", 12.0, "rm", Metrics::new(10.0546875, 3.390625, 7.515625, 1.265625, 8.78125, 2.0625, 5.453125, 5.453125, false)),
    glyph("\\circeq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.0625, 7.515625, 1.265625, 8.78125, 2.0625, 9.125, 9.125, false)),
    glyph("\\wedgeq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.6875, 7.515625, 1.265625, 8.78125, 2.0625, 9.75, 9.75, false)),
    glyph("\\veeeq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.6875, 7.515625, 1.265625, 8.78125, 2.0625, 9.75, 9.75, false)),
    glyph("\\stareq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.125, 7.515625, 1.265625, 8.78125, 2.0625, 10.1875, 10.1875, false)),
    glyph("\\triangleq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.1875, 7.515625, 1.265625, 8.78125, 2.0625, 10.25, 10.25, false)),
    glyph("\\nequiv", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.109375, 7.515625, 1.265625, 8.78125, -0.296875, 7.8125, 7.8125, false)),
    glyph("\\leqq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.65625, 7.515625, 1.28125, 8.796875, -1.0, 7.65625, 7.65625, false)),
    glyph("\\geqq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.65625, 7.515625, 1.28125, 8.796875, -1.0, 7.65625, 7.65625, false)),
    glyph("\\lneqq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 9.625, 7.515625, 1.28125, 8.796875, -1.96875, 7.65625, 7.65625, false)),
    glyph("\\gneqq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 9.625, 7.515625, 1.28125, 8.796875, -1.96875, 7.65625, 7.65625, false)),
    glyph("\\between", false, "default", 12.0, "rm", Metrics::new(5.56640625, 10.6875, 3.5, 1.03125, 4.53125, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\nless", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.0625, 7.515625, 1.265625, 8.78125, 0.03125, 8.09375, 8.09375, false)),
    glyph("\\ngtr", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.0625, 7.515625, 1.265625, 8.78125, -0.5625, 7.5, 7.5, false)),
    glyph("\\nleq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 9.21875, 7.515625, 1.265625, 8.78125, -1.21875, 8.0, 8.0, false)),
    glyph("\\ngeq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 9.21875, 7.515625, 1.265625, 8.78125, -1.21875, 8.0, 8.0, false)),
    glyph("\\lesssim", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.640625, 7.53125, 1.265625, 8.796875, -0.65625, 6.984375, 6.984375, false)),
    glyph("\\gtrsim", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.453125, 7.515625, 1.28125, 8.796875, -0.46875, 6.984375, 6.984375, false)),
    glyph("\\lessgtr", false, "default", 12.0, "rm", Metrics::new(10.0546875, 9.28125, 7.578125, 1.21875, 8.796875, -1.046875, 8.234375, 8.234375, false)),
    glyph("\\gtrless", false, "default", 12.0, "rm", Metrics::new(10.0546875, 9.28125, 7.578125, 1.21875, 8.796875, -1.046875, 8.234375, 8.234375, false)),
    glyph("\\preccurlyeq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 9.28125, 7.515625, 1.265625, 8.78125, -1.265625, 8.015625, 8.015625, false)),
    glyph("\\succcurlyeq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 9.28125, 7.515625, 1.265625, 8.78125, -1.265625, 8.015625, 8.015625, false)),
    glyph("\\precsim", false, "default", 12.0, "rm", Metrics::new(10.0546875, 9.03125, 7.515625, 1.265625, 8.78125, -1.015625, 8.015625, 8.015625, false)),
    glyph("\\succsim", false, "default", 12.0, "rm", Metrics::new(10.0546875, 9.03125, 7.515625, 1.265625, 8.78125, -1.015625, 8.015625, 8.015625, false)),
    glyph("\\nprec", false, "default", 12.0, "rm", Metrics::new(10.0546875, 9.90625, 7.515625, 1.265625, 8.78125, -0.734375, 9.171875, 9.171875, false)),
    glyph("\\nsucc", false, "default", 12.0, "rm", Metrics::new(10.0546875, 9.90625, 7.515625, 1.265625, 8.78125, -1.65625, 8.25, 8.25, false)),
    glyph("\\nsubset", false, "default", 12.0, "rm", Metrics::new(10.0546875, 9.875, 7.65625, 1.203125, 8.859375, -1.15625, 8.71875, 8.71875, false)),
    glyph("\\nsupset", false, "default", 12.0, "rm", Metrics::new(10.0546875, 9.875, 7.65625, 1.203125, 8.859375, -1.203125, 8.671875, 8.671875, false)),
    glyph("\\nsubseteq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 10.15625, 7.671875, 1.109375, 8.78125, -1.390625, 8.765625, 8.765625, false)),
    glyph("\\nsupseteq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 10.15625, 7.671875, 1.265625, 8.9375, -1.390625, 8.765625, 8.765625, false)),
    glyph("\\subsetneq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.234375, 7.671875, 1.109375, 8.78125, -0.875, 7.359375, 7.359375, false)),
    glyph("\\supsetneq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.234375, 7.671875, 1.109375, 8.78125, -0.875, 7.359375, 7.359375, false)),
    glyph("\\sqsubset", false, "default", 12.0, "rm", Metrics::new(10.0546875, 6.8125, 7.515625, 1.265625, 8.78125, 0.0, 6.8125, 6.8125, false)),
    glyph("\\sqsupset", false, "default", 12.0, "rm", Metrics::new(10.0546875, 6.8125, 7.515625, 1.265625, 8.78125, 0.0, 6.8125, 6.8125, false)),
    glyph("\\sqsubseteq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.5625, 7.515625, 1.265625, 8.78125, -1.0, 7.5625, 7.5625, false)),
    glyph("\\sqsupseteq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.5625, 7.515625, 1.265625, 8.78125, -1.0, 7.5625, 7.5625, false)),
    glyph("\\vDash", false, "default", 12.0, "rm", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\Vdash", false, "default", 12.0, "rm", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\Vvdash", false, "default", 12.0, "rm", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\VDash", false, "default", 12.0, "rm", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\nvdash", false, "default", 12.0, "rm", Metrics::new(10.453125, 9.34375, 8.40625, 1.03125, 9.4375, -0.46875, 8.875, 8.875, false)),
    glyph("\\nvDash", false, "default", 12.0, "rm", Metrics::new(10.453125, 9.34375, 8.40625, 1.03125, 9.4375, -0.46875, 8.875, 8.875, false)),
    glyph("\\nVdash", false, "default", 12.0, "rm", Metrics::new(10.453125, 9.34375, 8.40625, 1.03125, 9.4375, -0.46875, 8.875, 8.875, false)),
    glyph("\\nVDash", false, "default", 12.0, "rm", Metrics::new(10.453125, 9.34375, 8.40625, 1.03125, 9.4375, -0.46875, 8.875, 8.875, false)),
    glyph("\\vartriangleleft", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.171875, 7.515625, 1.265625, 8.78125, 0.171875, 7.34375, 7.34375, false)),
    glyph("\\vartriangleright", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.171875, 7.515625, 1.265625, 8.78125, 0.171875, 7.34375, 7.34375, false)),
    glyph("\\trianglelefteq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.671875, 7.515625, 1.265625, 8.78125, -0.578125, 8.09375, 8.09375, false)),
    glyph("\\trianglerighteq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.671875, 7.515625, 1.265625, 8.78125, -0.578125, 8.09375, 8.09375, false)),
    glyph("\\multimap", false, "default", 12.0, "rm", Metrics::new(10.0546875, 3.34375, 8.90625, 0.578125, 9.484375, 2.109375, 5.453125, 5.453125, false)),
    glyph("\\backsimeq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 3.875, 7.515625, 1.265625, 8.78125, 2.0625, 5.9375, 5.9375, false)),
    glyph("\\Subset", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.59375, 7.671875, 1.109375, 8.78125, -0.03125, 7.5625, 7.5625, false)),
    glyph("\\Supset", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.59375, 7.671875, 1.265625, 8.9375, -0.03125, 7.5625, 7.5625, false)),
    glyph("\\pitchfork", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.75, 5.59375, 2.234375, 7.828125, 0.0, 8.75, 8.75, false)),
    glyph("\\lessdot", false, "default", 12.0, "rm", Metrics::new(10.0546875, 6.421875, 7.515625, 1.265625, 8.78125, 0.546875, 6.96875, 6.96875, false)),
    glyph("\\gtrdot", false, "default", 12.0, "rm", Metrics::new(10.0546875, 6.421875, 7.515625, 1.265625, 8.78125, 0.546875, 6.96875, 6.96875, false)),
    glyph("\\lll", false, "default", 12.0, "rm", Metrics::new(17.068359375, 7.046875, 15.328125, 0.875, 16.203125, 0.265625, 7.3125, 7.3125, false)),
    glyph("\\ggg", false, "default", 12.0, "rm", Metrics::new(17.068359375, 7.046875, 15.328125, 0.875, 16.203125, 0.265625, 7.3125, 7.3125, false)),
    glyph("\\lesseqgtr", false, "default", 12.0, "rm", Metrics::new(10.0546875, 12.984375, 7.515625, 1.265625, 8.78125, -2.734375, 10.25, 10.25, false)),
    glyph("\\gtreqless", false, "default", 12.0, "rm", Metrics::new(10.0546875, 12.984375, 7.515625, 1.265625, 8.78125, -2.734375, 10.25, 10.25, false)),
    glyph("\\curlyeqprec", false, "default", 12.0, "rm", Metrics::new(10.0546875, 9.28125, 7.515625, 1.265625, 8.78125, -1.265625, 8.015625, 8.015625, false)),
    glyph("\\curlyeqsucc", false, "default", 12.0, "rm", Metrics::new(10.0546875, 9.28125, 7.515625, 1.265625, 8.78125, -1.265625, 8.015625, 8.015625, false)),
    glyph("\\npreccurlyeq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 11.3125, 7.515625, 1.265625, 8.78125, -2.140625, 9.171875, 9.171875, false)),
    glyph("\\nsucccurlyeq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 11.3125, 7.515625, 1.265625, 8.78125, -2.140625, 9.171875, 9.171875, false)),
    glyph("\\nsqsubseteq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 10.890625, 7.515625, 1.265625, 8.78125, -1.6875, 9.203125, 9.203125, false)),
    glyph("\\nsqsupseteq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 10.890625, 7.515625, 1.265625, 8.78125, -1.6875, 9.203125, 9.203125, false)),
    glyph("\\lnsim", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.640625, 7.53125, 1.265625, 8.796875, -1.65625, 6.984375, 6.984375, false)),
    glyph("\\gnsim", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.640625, 7.53125, 1.265625, 8.796875, -1.65625, 6.984375, 6.984375, false)),
    glyph("\\precnsim", false, "default", 12.0, "rm", Metrics::new(10.0546875, 10.046875, 7.515625, 1.265625, 8.78125, -2.03125, 8.015625, 8.015625, false)),
    glyph("\\succnsim", false, "default", 12.0, "rm", Metrics::new(10.0546875, 10.0625, 7.515625, 1.3125, 8.828125, -2.046875, 8.015625, 8.015625, false)),
    glyph("\\ntriangleleft", false, "default", 12.0, "rm", Metrics::new(10.0546875, 10.640625, 7.515625, 1.265625, 8.78125, -1.5625, 9.078125, 9.078125, false)),
    glyph("\\ntriangleright", false, "default", 12.0, "rm", Metrics::new(10.0546875, 10.640625, 7.515625, 1.265625, 8.78125, -1.5625, 9.078125, 9.078125, false)),
    glyph("\\ntrianglelefteq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 12.046875, 7.515625, 1.265625, 8.78125, -2.265625, 9.78125, 9.78125, false)),
    glyph("\\ntrianglerighteq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 12.046875, 7.515625, 1.25, 8.765625, -2.265625, 9.78125, 9.78125, false)),
    glyph("\\leqslant", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -1.46875, 6.96875, 6.96875, false)),
    glyph("\\geqslant", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -1.46875, 6.96875, 6.96875, false)),
    glyph("\\lessapprox", false, "default", 12.0, "rm", Metrics::new(10.0546875, 9.546875, 7.53125, 1.265625, 8.796875, -1.59375, 7.953125, 7.953125, false)),
    glyph("\\gtrapprox", false, "default", 12.0, "rm", Metrics::new(10.0546875, 9.546875, 7.53125, 1.265625, 8.796875, -1.59375, 7.953125, 7.953125, false)),
    glyph("\\lneq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -1.453125, 6.984375, 6.984375, false)),
    glyph("\\gneq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -1.453125, 6.984375, 6.984375, false)),
    glyph("\\lnapprox", false, "default", 12.0, "rm", Metrics::new(10.0546875, 10.390625, 7.53125, 1.265625, 8.796875, -2.4375, 7.953125, 7.953125, false)),
    glyph("\\gnapprox", false, "default", 12.0, "rm", Metrics::new(10.0546875, 10.390625, 7.53125, 1.265625, 8.796875, -2.4375, 7.953125, 7.953125, false)),
    glyph("\\lesseqqgtr", false, "default", 12.0, "rm", Metrics::new(10.0546875, 13.21875, 7.515625, 1.265625, 8.78125, -3.71875, 9.5, 9.5, false)),
    glyph("\\gtreqqless", false, "default", 12.0, "rm", Metrics::new(10.0546875, 13.21875, 7.515625, 1.265625, 8.78125, -3.71875, 9.5, 9.5, false)),
    glyph("\\eqslantless", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -0.71875, 7.71875, 7.71875, false)),
    glyph("\\eqslantgtr", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -0.71875, 7.71875, 7.71875, false)),
    glyph("\\preceq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.296875, 7.515625, 1.265625, 8.78125, -0.28125, 8.015625, 8.015625, false)),
    glyph("\\succeq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.296875, 7.515625, 1.265625, 8.78125, -0.28125, 8.015625, 8.015625, false)),
    glyph("\\precneqq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 10.28125, 7.515625, 1.265625, 8.78125, -2.34375, 7.9375, 7.9375, false)),
    glyph("\\succneqq", false, "default", 12.0, "rm", Metrics::new(10.0546875, 10.28125, 7.515625, 1.265625, 8.78125, -2.34375, 7.9375, 7.9375, false)),
    glyph("\\precapprox", false, "default", 12.0, "rm", Metrics::new(10.0546875, 10.609375, 7.515625, 1.265625, 8.78125, -2.296875, 8.3125, 8.3125, false)),
    glyph("\\succapprox", false, "default", 12.0, "rm", Metrics::new(10.0546875, 10.609375, 7.515625, 1.265625, 8.78125, -2.296875, 8.3125, 8.3125, false)),
    glyph("\\precnapprox", false, "default", 12.0, "rm", Metrics::new(10.0546875, 11.421875, 7.53125, 1.265625, 8.796875, -3.109375, 8.3125, 8.3125, false)),
    glyph("\\succnapprox", false, "default", 12.0, "rm", Metrics::new(10.0546875, 11.421875, 7.53125, 1.265625, 8.796875, -3.109375, 8.3125, 8.3125, false)),
    glyph("\\dotplus", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.75, 7.515625, 1.265625, 8.78125, 0.0, 8.75, 8.75, false)),
    glyph("\\smallsetminus", false, "default", 12.0, "rm", Metrics::new(7.640625, 9.859375, 4.046875, 2.3125, 6.359375, -0.640625, 9.21875, 9.21875, false)),
    glyph("\\dotminus", false, "default", 12.0, "rm", Metrics::new(10.0546875, 3.359375, 7.515625, 1.265625, 8.78125, 3.265625, 6.625, 6.625, false)),
    glyph("\\cupdot", false, "default", 12.0, "rm", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\circledcirc", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\circledast", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\circleddash", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\boxplus", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\boxminus", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\boxtimes", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\boxdot", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\intercal", false, "default", 12.0, "rm", Metrics::new(6.24609375, 8.40625, 3.46875, 1.390625, 4.859375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\veebar", false, "default", 12.0, "rm", Metrics::new(8.783203125, 8.890625, 6.4375, 1.171875, 7.609375, 0.0, 8.890625, 8.890625, false)),
    glyph("\\barwedge", false, "default", 12.0, "rm", Metrics::new(8.783203125, 8.890625, 6.4375, 1.171875, 7.609375, 0.0, 8.890625, 8.890625, false)),
    glyph("\\barvee", false, "default", 12.0, "rm", Metrics::new(8.783203125, 8.890625, 6.4375, 1.171875, 7.609375, 0.0, 8.890625, 8.890625, false)),
    glyph("\\divideontimes", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.1875, 7.515625, 1.265625, 8.78125, 0.171875, 7.359375, 7.359375, false)),
    glyph("\\ltimes", false, "default", 12.0, "rm", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\rtimes", false, "default", 12.0, "rm", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\leftthreetimes", false, "default", 12.0, "rm", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\rightthreetimes", false, "default", 12.0, "rm", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\curlyvee", false, "default", 12.0, "rm", Metrics::new(8.7890625, 6.953125, 7.625, 0.578125, 8.203125, 0.0, 6.953125, 6.953125, false)),
    glyph("\\curlywedge", false, "default", 12.0, "rm", Metrics::new(8.7890625, 6.953125, 7.625, 0.578125, 8.203125, 0.0, 6.953125, 6.953125, false)),
    glyph("\\Cap", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.953125, 7.59375, 1.234375, 8.828125, 0.0, 7.953125, 7.953125, false)),
    glyph("\\Cup", false, "default", 12.0, "rm", Metrics::new(10.0546875, 7.953125, 7.59375, 1.234375, 8.828125, -0.171875, 7.78125, 7.78125, false)),
    glyph("\\doublebarwedge", false, "default", 12.0, "rm", Metrics::new(10.0546875, 6.15625, 5.140625, 2.453125, 7.59375, 0.0, 6.15625, 6.15625, false)),
    glyph("\\bigodot", false, "default", 12.0, "rm", Metrics::new(12.0, 11.34375, 11.3125, 0.34375, 11.65625, -2.375, 8.96875, 8.96875, false)),
    glyph("\\oiint", false, "default", 12.0, "rm", Metrics::new(9.46875, 11.625, 8.09375, 0.6875, 8.78125, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\oiiint", false, "default", 12.0, "rm", Metrics::new(12.685546875, 11.625, 11.3125, 0.6875, 12.0, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\iiiint", false, "default", 12.0, "rm", Metrics::new(15.90234375, 11.625, 14.53125, 0.6875, 15.21875, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\minus", false, "default", 12.0, "rm", Metrics::new(10.0546875, 1.0, 7.515625, 1.265625, 8.78125, 3.265625, 4.265625, 4.265625, false)),
    glyph("\\cdotp", false, "default", 12.0, "rm", Metrics::new(3.814453125, 1.484375, 1.234375, 1.28125, 2.515625, 3.421875, 4.90625, 4.90625, false)),
    glyph("\\hslash", false, "default", 12.0, "rm", Metrics::new(7.60546875, 9.125, 6.53125, 0.53125, 7.0625, 0.0, 9.125, 9.125, false)),
    glyph("\\beth", false, "default", 12.0, "rm", Metrics::new(8.0859375, 9.078125, 7.859375, -0.03125, 7.828125, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\gimel", false, "default", 12.0, "rm", Metrics::new(5.58984375, 9.328125, 4.71875, 0.15625, 4.875, -0.421875, 8.90625, 8.90625, false)),
    glyph("\\daleth", false, "default", 12.0, "rm", Metrics::new(7.734375, 9.328125, 6.59375, 0.5, 7.09375, -0.421875, 8.90625, 8.90625, false)),
    glyph("\\mho", false, "default", 12.0, "rm", Metrics::new(9.169921875, 8.859375, 8.265625, 0.453125, 8.71875, -0.171875, 8.6875, 8.6875, false)),
    glyph("\\eth", false, "default", 12.0, "rm", Metrics::new(7.341796875, 9.296875, 6.03125, 0.65625, 6.6875, -0.171875, 9.125, 9.125, false)),
    glyph("\\Finv", false, "default", 12.0, "rm", Metrics::new(6.90234375, 8.75, 5.03125, 1.171875, 6.203125, 0.0, 8.75, 8.75, false)),
    glyph("\\Game", false, "default", 12.0, "rm", Metrics::new(9.298828125, 9.078125, 7.640625, 0.953125, 8.59375, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\digamma", false, "default", 12.0, "rm", Metrics::new(5.501953125, 11.625, 6.03125, -1.125, 4.90625, -2.5, 9.125, 9.125, false)),
    glyph("\\varkappa", false, "default", 12.0, "rm", Metrics::new(7.962890625, 6.6875, 6.546875, 0.65625, 7.203125, -0.078125, 6.609375, 6.609375, false)),
    glyph("\\backepsilon", false, "default", 12.0, "rm", Metrics::new(7.3828125, 6.890625, 5.09375, 1.15625, 6.25, -0.171875, 6.71875, 6.71875, false)),
    glyph("\\AA", false, "default", 12.0, "rm", Metrics::new(8.208984375, 11.140625, 8.015625, 0.09375, 8.109375, 0.0, 11.140625, 11.140625, false)),
    glyph("\\ae", false, "default", 12.0, "rm", Metrics::new(11.783203125, 6.890625, 10.4375, 0.71875, 11.15625, -0.171875, 6.71875, 6.71875, false)),
    glyph("\\AE", false, "default", 12.0, "rm", Metrics::new(11.689453125, 8.75, 10.875, 0.046875, 10.921875, 0.0, 8.75, 8.75, false)),
    glyph("\\oe", false, "default", 12.0, "rm", Metrics::new(12.275390625, 6.890625, 10.984375, 0.65625, 11.640625, -0.171875, 6.71875, 6.71875, false)),
    glyph("\\OE", false, "default", 12.0, "rm", Metrics::new(12.837890625, 8.75, 11.40625, 0.671875, 12.078125, 0.0, 8.75, 8.75, false)),
    glyph("\\o", false, "default", 12.0, "rm", Metrics::new(7.341796875, 7.65625, 6.5, 0.421875, 6.921875, -0.546875, 7.109375, 7.109375, false)),
    glyph("\\O", false, "default", 12.0, "rm", Metrics::new(9.4453125, 9.546875, 8.25, 0.59375, 8.84375, -0.40625, 9.140625, 9.140625, false)),
    glyph("\\ss", false, "default", 12.0, "rm", Metrics::new(7.55859375, 9.296875, 5.921875, 1.09375, 7.015625, -0.171875, 9.125, 9.125, false)),
    glyph("\\l", false, "default", 12.0, "rm", Metrics::new(3.41015625, 9.125, 3.40625, 0.015625, 3.421875, 0.0, 9.125, 9.125, false)),
    glyph("\\L", false, "default", 12.0, "rm", Metrics::new(6.744140625, 8.75, 6.765625, -0.078125, 6.6875, 0.0, 8.75, 8.75, false)),
    glyph("\\complement", false, "default", 12.0, "rm", Metrics::new(7.634765625, 9.078125, 5.84375, 0.796875, 6.640625, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\nexists", false, "default", 12.0, "rm", Metrics::new(7.58203125, 9.859375, 5.640625, 1.171875, 6.8125, -0.546875, 9.3125, 9.3125, false)),
    glyph("\\varnothing", false, "default", 12.0, "rm", Metrics::new(10.453125, 8.625, 8.640625, 0.90625, 9.546875, -0.109375, 8.515625, 8.515625, false)),
    glyph("\\smallin", false, "default", 12.0, "rm", Metrics::new(8.61328125, 5.703125, 6.078125, 1.265625, 7.34375, 0.90625, 6.609375, 6.609375, false)),
    glyph("\\QED", false, "default", 12.0, "rm", Metrics::new(7.634765625, 5.828125, 4.109375, 1.765625, 5.875, 0.0, 5.828125, 5.828125, false)),
    glyph("\\measuredangle", false, "default", 12.0, "rm", Metrics::new(10.7578125, 9.375, 8.390625, 1.03125, 9.421875, -0.625, 8.75, 8.75, false)),
    glyph("\\sphericalangle", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.75, 7.40625, 1.390625, 8.796875, -0.03125, 8.71875, 8.71875, false)),
    glyph("\\rightangle", false, "default", 12.0, "rm", Metrics::new(10.0546875, 6.734375, 6.734375, 1.65625, 8.390625, 1.1875, 7.921875, 7.921875, false)),
    glyph("\\therefore", false, "default", 12.0, "rm", Metrics::new(7.634765625, 6.046875, 6.21875, 0.703125, 6.921875, 1.203125, 7.25, 7.25, false)),
    glyph("\\because", false, "default", 12.0, "rm", Metrics::new(7.634765625, 6.046875, 6.21875, 0.703125, 6.921875, 1.203125, 7.25, 7.25, false)),
    glyph("\\Colon", false, "default", 12.0, "rm", Metrics::new(7.634765625, 6.046875, 6.21875, 0.703125, 6.921875, 1.203125, 7.25, 7.25, false)),
    glyph("\\lnot", false, "default", 12.0, "rm", Metrics::new(10.0546875, 3.359375, 7.515625, 1.265625, 8.78125, 1.6875, 5.046875, 5.046875, false)),
    glyph("\\sqrt", false, "default", 12.0, "rm", Metrics::new(7.646484375, 9.96875, 7.28125, 0.359375, 7.640625, -0.234375, 9.734375, 9.734375, false)),
    glyph("\\dots", false, "default", 12.0, "rm", Metrics::new(12.0, 1.484375, 9.234375, 1.390625, 10.625, 0.0, 1.484375, 1.484375, false)),
    glyph("\\adots", false, "default", 12.0, "rm", Metrics::new(12.0, 9.6875, 9.21875, 1.390625, 10.609375, -1.109375, 8.578125, 8.578125, false)),
    glyph("\\ulcorner", false, "default", 12.0, "rm", Metrics::new(5.625, 4.015625, 3.8125, 1.03125, 4.84375, 5.109375, 9.125, 9.125, false)),
    glyph("\\urcorner", false, "default", 12.0, "rm", Metrics::new(5.625, 4.015625, 3.8125, 0.78125, 4.59375, 5.109375, 9.125, 9.125, false)),
    glyph("\\llcorner", false, "default", 12.0, "rm", Metrics::new(5.625, 4.015625, 3.8125, 1.03125, 4.84375, -0.84375, 3.171875, 3.171875, false)),
    glyph("\\lrcorner", false, "default", 12.0, "rm", Metrics::new(5.625, 4.015625, 3.8125, 0.78125, 4.59375, -0.84375, 3.171875, 3.171875, false)),
    glyph("\\lbrack", false, "default", 12.0, "rm", Metrics::new(4.681640625, 10.703125, 2.484375, 1.03125, 3.515625, -1.578125, 9.125, 9.125, false)),
    glyph("\\rbrack", false, "default", 12.0, "rm", Metrics::new(4.681640625, 10.703125, 2.484375, 1.171875, 3.65625, -1.578125, 9.125, 9.125, false)),
    glyph("\\leftparen", false, "default", 12.0, "rm", Metrics::new(4.681640625, 10.6875, 2.6875, 1.03125, 3.71875, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\rightparen", false, "default", 12.0, "rm", Metrics::new(4.681640625, 10.6875, 2.6875, 0.96875, 3.65625, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\bigtriangleup", false, "default", 12.0, "rm", Metrics::new(9.228515625, 9.1875, 9.15625, 0.03125, 9.1875, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\vartriangle", false, "default", 12.0, "rm", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\blacktriangle", false, "default", 12.0, "rm", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\triangleright", false, "default", 12.0, "rm", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\blacktriangleright", false, "default", 12.0, "rm", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\bigtriangledown", false, "default", 12.0, "rm", Metrics::new(9.228515625, 9.1875, 9.15625, 0.03125, 9.1875, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\triangledown", false, "default", 12.0, "rm", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\blacktriangledown", false, "default", 12.0, "rm", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\triangleleft", false, "default", 12.0, "rm", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\blacktriangleleft", false, "default", 12.0, "rm", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\lozenge", false, "default", 12.0, "rm", Metrics::new(5.9296875, 12.484375, 5.859375, 0.03125, 5.890625, -2.796875, 9.6875, 9.6875, false)),
    glyph("\\blacksquare", false, "default", 12.0, "rm", Metrics::new(11.337890625, 9.1875, 9.15625, 1.09375, 10.25, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\square", false, "default", 12.0, "rm", Metrics::new(11.337890625, 9.1875, 9.15625, 1.09375, 10.25, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\Box", false, "default", 12.0, "rm", Metrics::new(11.337890625, 9.1875, 9.15625, 1.09375, 10.25, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\bigstar", false, "default", 12.0, "rm", Metrics::new(10.7578125, 8.71875, 9.203125, 0.78125, 9.984375, -0.046875, 8.671875, 8.671875, false)),
    glyph("\\diagup", false, "default", 12.0, "rm", Metrics::new(7.224609375, 14.015625, 8.265625, -0.515625, 7.75, -2.875, 11.140625, 11.140625, false)),
    glyph("\\diagdown", false, "default", 12.0, "rm", Metrics::new(7.224609375, 14.015625, 8.265625, -0.515625, 7.75, -2.875, 11.140625, 11.140625, false)),
    glyph("\\varspadesuit", false, "default", 12.0, "rm", Metrics::new(10.7578125, 8.75, 6.984375, 1.890625, 8.875, 0.0, 8.75, 8.75, false)),
    glyph("\\varheartsuit", false, "default", 12.0, "rm", Metrics::new(10.7578125, 8.75, 8.640625, 1.0625, 9.703125, 0.0, 8.75, 8.75, false)),
    glyph("\\vardiamondsuit", false, "default", 12.0, "rm", Metrics::new(10.7578125, 8.75, 6.71875, 2.015625, 8.734375, 0.0, 8.75, 8.75, false)),
    glyph("\\varclubsuit", false, "default", 12.0, "rm", Metrics::new(10.7578125, 8.796875, 8.078125, 1.34375, 9.421875, 0.0, 8.796875, 8.796875, false)),
    glyph("\\checkmark", false, "default", 12.0, "rm", Metrics::new(10.0546875, 6.40625, 6.21875, 1.796875, 8.015625, 1.15625, 7.5625, 7.5625, false)),
    glyph("\\maltese", false, "default", 12.0, "rm", Metrics::new(10.0546875, 8.75, 8.75, 0.65625, 9.40625, 0.0, 8.75, 8.75, false)),
    glyph("\\sun", false, "default", 12.0, "rm", Metrics::new(10.7578125, 8.765625, 8.765625, 1.0, 9.765625, 0.0, 8.765625, 8.765625, false)),
    glyph("\\mercury", false, "default", 12.0, "rm", Metrics::new(7.365234375, 10.0, 5.3125, 1.03125, 6.34375, -1.21875, 8.78125, 8.78125, false)),
    glyph("\\venus", false, "default", 12.0, "rm", Metrics::new(8.7890625, 10.28125, 6.734375, 1.03125, 7.765625, -1.5, 8.78125, 8.78125, false)),
    glyph("\\earth", false, "default", 12.0, "rm", Metrics::new(8.7890625, 10.28125, 6.734375, 1.03125, 7.765625, -0.171875, 10.109375, 10.109375, false)),
    glyph("\\mars", false, "default", 12.0, "rm", Metrics::new(10.7578125, 8.8125, 9.015625, 0.953125, 9.96875, -0.171875, 8.640625, 8.640625, false)),
    glyph("\\jupiter", false, "default", 12.0, "rm", Metrics::new(10.7578125, 8.765625, 6.78125, 1.984375, 8.765625, 0.0, 8.765625, 8.765625, false)),
    glyph("\\saturn", false, "default", 12.0, "rm", Metrics::new(10.7578125, 8.765625, 5.5, 2.625, 8.125, 0.0, 8.765625, 8.765625, false)),
    glyph("\\uranus", false, "default", 12.0, "rm", Metrics::new(10.7578125, 8.765625, 7.84375, 1.453125, 9.296875, 0.0, 8.765625, 8.765625, false)),
    glyph("\\neptune", false, "default", 12.0, "rm", Metrics::new(10.7578125, 8.765625, 7.703125, 1.53125, 9.234375, 0.0, 8.765625, 8.765625, false)),
    glyph("\\pluto", false, "default", 12.0, "rm", Metrics::new(10.7578125, 8.765625, 4.984375, 2.890625, 7.875, 0.0, 8.765625, 8.765625, false)),
    glyph("\\male", false, "default", 12.0, "rm", Metrics::new(10.7578125, 8.8125, 9.015625, 0.953125, 9.96875, -0.171875, 8.640625, 8.640625, false)),
    glyph("\\female", false, "default", 12.0, "rm", Metrics::new(8.7890625, 10.28125, 6.734375, 1.03125, 7.765625, -1.5, 8.78125, 8.78125, false)),
    glyph("\\circledR", false, "default", 12.0, "rm", Metrics::new(12.0, 8.703125, 8.6875, 1.65625, 10.34375, 0.0, 8.703125, 8.703125, false)),
    glyph("\\yen", false, "default", 12.0, "rm", Metrics::new(7.634765625, 8.75, 6.65625, 0.484375, 7.140625, 0.0, 8.75, 8.75, false)),
    glyph("\\sterling", false, "default", 12.0, "rm", Metrics::new(7.634765625, 8.90625, 5.828125, 0.75, 6.578125, 0.0, 8.90625, 8.90625, false)),
    glyph("\\cent", false, "default", 12.0, "rm", Metrics::new(7.634765625, 10.21875, 5.1875, 1.015625, 6.203125, -1.828125, 8.390625, 8.390625, false)),
    glyph("\\backprime", false, "default", 12.0, "rm", Metrics::new(2.724609375, 2.1875, 2.203125, 0.234375, 2.4375, 6.5625, 8.75, 8.75, false)),
    glyph("\\dag", false, "default", 12.0, "rm", Metrics::new(6.0, 9.90625, 5.34375, 0.328125, 5.671875, -1.15625, 8.75, 8.75, false)),
    glyph("\\ddag", false, "default", 12.0, "rm", Metrics::new(6.0, 9.90625, 5.34375, 0.328125, 5.671875, -1.15625, 8.75, 8.75, false)),
    glyph("é", false, "default", 12.0, "rm", Metrics::new(7.3828125, 9.765625, 6.09375, 0.65625, 6.75, -0.171875, 9.59375, 9.59375, false)),
    glyph(" ", false, "default", 12.0, "rm", Metrics::new(3.814453125, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, false)),
    glyph("a", false, "it", 10.0, "it", Metrics::new(6.1279296875, 5.734375, 5.0625, 0.40625, 5.46875, -0.140625, 5.59375, 5.59375, true)),
    glyph("b", false, "it", 10.0, "it", Metrics::new(6.34765625, 7.734375, 5.515625, 0.359375, 5.875, -0.140625, 7.59375, 7.59375, true)),
    glyph("c", false, "it", 10.0, "it", Metrics::new(5.498046875, 5.734375, 4.90625, 0.453125, 5.359375, -0.140625, 5.59375, 5.59375, true)),
    glyph("d", false, "it", 10.0, "it", Metrics::new(6.34765625, 7.734375, 5.9375, 0.453125, 6.390625, -0.140625, 7.59375, 7.59375, true)),
    glyph("e", false, "it", 10.0, "it", Metrics::new(6.15234375, 5.734375, 5.25, 0.453125, 5.703125, -0.140625, 5.59375, 5.59375, true)),
    glyph("f", false, "it", 10.0, "it", Metrics::new(3.5205078125, 7.59375, 4.109375, 0.671875, 4.78125, 0.0, 7.59375, 7.59375, true)),
    glyph("g", false, "it", 10.0, "it", Metrics::new(6.34765625, 7.671875, 5.640625, 0.328125, 5.96875, -2.078125, 5.59375, 5.59375, true)),
    glyph("h", false, "it", 10.0, "it", Metrics::new(6.337890625, 7.59375, 5.296875, 0.359375, 5.65625, 0.0, 7.59375, 7.59375, true)),
    glyph("i", false, "it", 10.0, "it", Metrics::new(2.7783203125, 7.59375, 2.375, 0.359375, 2.734375, 0.0, 7.59375, 7.59375, true)),
    glyph("j", false, "it", 10.0, "it", Metrics::new(2.7783203125, 9.671875, 3.890625, -1.125, 2.765625, -2.078125, 7.59375, 7.59375, true)),
    glyph("k", false, "it", 10.0, "it", Metrics::new(5.791015625, 7.59375, 5.765625, 0.359375, 6.125, 0.0, 7.59375, 7.59375, true)),
    glyph("l", false, "it", 10.0, "it", Metrics::new(2.7783203125, 7.59375, 2.375, 0.359375, 2.734375, 0.0, 7.59375, 7.59375, true)),
    glyph("m", false, "it", 10.0, "it", Metrics::new(9.7412109375, 5.59375, 8.703125, 0.359375, 9.0625, 0.0, 5.59375, 5.59375, true)),
    glyph("n", false, "it", 10.0, "it", Metrics::new(6.337890625, 5.59375, 5.296875, 0.359375, 5.65625, 0.0, 5.59375, 5.59375, true)),
    glyph("o", false, "it", 10.0, "it", Metrics::new(6.1181640625, 5.734375, 5.203125, 0.453125, 5.65625, -0.140625, 5.59375, 5.59375, true)),
    glyph("p", false, "it", 10.0, "it", Metrics::new(6.34765625, 7.671875, 5.921875, -0.03125, 5.890625, -2.078125, 5.59375, 5.59375, true)),
    glyph("q", false, "it", 10.0, "it", Metrics::new(6.34765625, 7.65625, 5.515625, 0.453125, 5.96875, -2.0625, 5.59375, 5.59375, true)),
    glyph("r", false, "it", 10.0, "it", Metrics::new(4.111328125, 5.59375, 4.265625, 0.359375, 4.625, 0.0, 5.59375, 5.59375, true)),
    glyph("s", false, "it", 10.0, "it", Metrics::new(5.2099609375, 5.734375, 4.890625, 0.109375, 5.0, -0.140625, 5.59375, 5.59375, true)),
    glyph("t", false, "it", 10.0, "it", Metrics::new(3.9208984375, 7.015625, 3.59375, 0.640625, 4.234375, 0.0, 7.015625, 7.015625, true)),
    glyph("u", false, "it", 10.0, "it", Metrics::new(6.337890625, 5.609375, 5.3125, 0.578125, 5.890625, -0.140625, 5.46875, 5.46875, true)),
    glyph("v", false, "it", 10.0, "it", Metrics::new(5.91796875, 5.46875, 5.328125, 0.71875, 6.046875, 0.0, 5.46875, 5.46875, true)),
    glyph("w", false, "it", 10.0, "it", Metrics::new(8.1787109375, 5.46875, 7.34375, 0.84375, 8.1875, 0.0, 5.46875, 5.46875, true)),
    glyph("x", false, "it", 10.0, "it", Metrics::new(5.91796875, 5.46875, 6.265625, -0.265625, 6.0, 0.0, 5.46875, 5.46875, true)),
    glyph("y", false, "it", 10.0, "it", Metrics::new(5.91796875, 7.546875, 6.28125, -0.25, 6.03125, -2.078125, 5.46875, 5.46875, true)),
    glyph("z", false, "it", 10.0, "it", Metrics::new(5.2490234375, 5.46875, 5.46875, -0.03125, 5.4375, 0.0, 5.46875, 5.46875, true)),
    glyph("A", false, "it", 10.0, "it", Metrics::new(6.8408203125, 7.296875, 6.6875, -0.53125, 6.15625, 0.0, 7.296875, 7.296875, true)),
    glyph("B", false, "it", 10.0, "it", Metrics::new(6.8603515625, 7.296875, 5.984375, 0.265625, 6.25, 0.0, 7.296875, 7.296875, true)),
    glyph("C", false, "it", 10.0, "it", Metrics::new(6.982421875, 7.5625, 6.53125, 0.421875, 6.953125, -0.140625, 7.421875, 7.421875, true)),
    glyph("D", false, "it", 10.0, "it", Metrics::new(7.7001953125, 7.296875, 6.953125, 0.265625, 7.21875, 0.0, 7.296875, 7.296875, true)),
    glyph("E", false, "it", 10.0, "it", Metrics::new(6.318359375, 7.296875, 6.03125, 0.265625, 6.296875, 0.0, 7.296875, 7.296875, true)),
    glyph("F", false, "it", 10.0, "it", Metrics::new(5.751953125, 7.296875, 5.609375, 0.265625, 5.875, 0.0, 7.296875, 7.296875, true)),
    glyph("G", false, "it", 10.0, "it", Metrics::new(7.7490234375, 7.5625, 6.796875, 0.453125, 7.25, -0.140625, 7.421875, 7.421875, true)),
    glyph("H", false, "it", 10.0, "it", Metrics::new(7.51953125, 7.296875, 6.984375, 0.265625, 7.25, 0.0, 7.296875, 7.296875, true)),
    glyph("I", false, "it", 10.0, "it", Metrics::new(2.94921875, 7.296875, 2.421875, 0.265625, 2.6875, 0.0, 7.296875, 7.296875, true)),
    glyph("J", false, "it", 10.0, "it", Metrics::new(2.94921875, 9.296875, 4.296875, -1.640625, 2.65625, -2.0, 7.296875, 7.296875, true)),
    glyph("K", false, "it", 10.0, "it", Metrics::new(6.5576171875, 7.296875, 6.953125, 0.265625, 7.21875, 0.0, 7.296875, 7.296875, true)),
    glyph("L", false, "it", 10.0, "it", Metrics::new(5.5712890625, 7.296875, 4.703125, 0.265625, 4.96875, 0.0, 7.296875, 7.296875, true)),
    glyph("M", false, "it", 10.0, "it", Metrics::new(8.6279296875, 7.296875, 8.09375, 0.265625, 8.359375, 0.0, 7.296875, 7.296875, true)),
    glyph("N", false, "it", 10.0, "it", Metrics::new(7.48046875, 7.296875, 6.953125, 0.265625, 7.21875, 0.0, 7.296875, 7.296875, true)),
    glyph("O", false, "it", 10.0, "it", Metrics::new(7.87109375, 7.5625, 7.0625, 0.40625, 7.46875, -0.140625, 7.421875, 7.421875, true)),
    glyph("P", false, "it", 10.0, "it", Metrics::new(6.0302734375, 7.296875, 5.75, 0.265625, 6.015625, 0.0, 7.296875, 7.296875, true)),
    glyph("Q", false, "it", 10.0, "it", Metrics::new(7.87109375, 8.703125, 7.0625, 0.40625, 7.46875, -1.28125, 7.421875, 7.421875, true)),
    glyph("R", false, "it", 10.0, "it", Metrics::new(6.9482421875, 7.296875, 5.734375, 0.265625, 6.0, 0.0, 7.296875, 7.296875, true)),
    glyph("S", false, "it", 10.0, "it", Metrics::new(6.34765625, 7.5625, 5.96875, 0.0625, 6.03125, -0.140625, 7.421875, 7.421875, true)),
    glyph("T", false, "it", 10.0, "it", Metrics::new(6.1083984375, 7.296875, 6.328125, 0.4375, 6.765625, 0.0, 7.296875, 7.296875, true)),
    glyph("U", false, "it", 10.0, "it", Metrics::new(7.3193359375, 7.4375, 6.546875, 0.578125, 7.125, -0.140625, 7.296875, 7.296875, true)),
    glyph("V", false, "it", 10.0, "it", Metrics::new(6.8408203125, 7.296875, 6.640625, 0.78125, 7.421875, 0.0, 7.296875, 7.296875, true)),
    glyph("W", false, "it", 10.0, "it", Metrics::new(9.8876953125, 7.296875, 9.234375, 0.96875, 10.203125, 0.0, 7.296875, 7.296875, true)),
    glyph("X", false, "it", 10.0, "it", Metrics::new(6.8505859375, 7.296875, 7.453125, -0.421875, 7.03125, 0.0, 7.296875, 7.296875, true)),
    glyph("Y", false, "it", 10.0, "it", Metrics::new(6.1083984375, 7.296875, 6.140625, 0.625, 6.765625, 0.0, 7.296875, 7.296875, true)),
    glyph("Z", false, "it", 10.0, "it", Metrics::new(6.8505859375, 7.296875, 7.25, -0.21875, 7.03125, 0.0, 7.296875, 7.296875, true)),
    glyph("\\alpha", false, "it", 10.0, "it", Metrics::new(6.591796875, 5.734375, 6.171875, 0.28125, 6.453125, -0.125, 5.609375, 5.609375, true)),
    glyph("\\beta", false, "it", 10.0, "it", Metrics::new(6.3818359375, 9.734375, 6.09375, -0.015625, 6.078125, -2.078125, 7.65625, 7.65625, true)),
    glyph("\\gamma", false, "it", 10.0, "it", Metrics::new(5.91796875, 7.546875, 5.609375, 0.75, 6.359375, -2.078125, 5.46875, 5.46875, true)),
    glyph("\\delta", false, "it", 10.0, "it", Metrics::new(6.1181640625, 7.5625, 5.546875, 0.109375, 5.65625, -0.140625, 7.421875, 7.421875, true)),
    glyph("\\epsilon", false, "it", 10.0, "it", Metrics::new(6.15234375, 5.734375, 5.046875, 0.28125, 5.328125, -0.140625, 5.59375, 5.59375, true)),
    glyph("\\varepsilon", false, "it", 10.0, "it", Metrics::new(5.4052734375, 5.75, 4.65625, 0.390625, 5.046875, -0.140625, 5.609375, 5.609375, true)),
    glyph("\\zeta", false, "it", 10.0, "it", Metrics::new(5.439453125, 9.6875, 5.9375, -0.03125, 5.90625, -2.09375, 7.59375, 7.59375, true)),
    glyph("\\eta", false, "it", 10.0, "it", Metrics::new(6.337890625, 7.671875, 5.4375, 0.5625, 6.0, -2.078125, 5.59375, 5.59375, true)),
    glyph("\\theta", false, "it", 10.0, "it", Metrics::new(6.1181640625, 7.78125, 5.71875, 0.203125, 5.921875, -0.109375, 7.671875, 7.671875, true)),
    glyph("\\vartheta", false, "it", 10.0, "it", Metrics::new(6.19140625, 7.78125, 5.828125, 0.15625, 5.984375, -0.109375, 7.671875, 7.671875, true)),
    glyph("\\iota", false, "it", 10.0, "it", Metrics::new(3.3837890625, 5.46875, 2.1875, 0.46875, 2.65625, 0.0, 5.46875, 5.46875, true)),
    glyph("\\kappa", false, "it", 10.0, "it", Metrics::new(5.8935546875, 5.46875, 5.4375, 0.40625, 5.84375, 0.0, 5.46875, 5.46875, true)),
    glyph("\\lambda", false, "it", 10.0, "it", Metrics::new(5.91796875, 7.59375, 5.328125, -0.4375, 4.890625, 0.0, 7.59375, 7.59375, true)),
    glyph("\\mu", false, "it", 10.0, "it", Metrics::new(6.3623046875, 7.546875, 6.046875, -0.125, 5.921875, -2.078125, 5.46875, 5.46875, true)),
    glyph("\\nu", false, "it", 10.0, "it", Metrics::new(5.5859375, 5.46875, 4.453125, 0.890625, 5.34375, 0.0, 5.46875, 5.46875, true)),
    glyph("\\xi", false, "it", 10.0, "it", Metrics::new(5.576171875, 9.6875, 5.671875, -0.03125, 5.640625, -2.09375, 7.59375, 7.59375, true)),
    glyph("\\pi", false, "it", 10.0, "it", Metrics::new(6.0205078125, 5.65625, 5.609375, 0.546875, 6.15625, -0.1875, 5.46875, 5.46875, true)),
    glyph("\\varpi", false, "it", 10.0, "it", Metrics::new(8.3740234375, 5.609375, 8.46875, 0.109375, 8.578125, -0.140625, 5.46875, 5.46875, true)),
    glyph("\\rho", false, "it", 10.0, "it", Metrics::new(6.34765625, 7.671875, 6.078125, 0.15625, 6.234375, -2.078125, 5.59375, 5.59375, true)),
    glyph("\\varrho", false, "it", 10.0, "it", Metrics::new(6.34765625, 7.671875, 6.109375, 0.125, 6.234375, -2.078125, 5.59375, 5.59375, true)),
    glyph("\\sigma", false, "it", 10.0, "it", Metrics::new(6.337890625, 5.609375, 6.296875, 0.296875, 6.59375, -0.140625, 5.46875, 5.46875, true)),
    glyph("\\varsigma", false, "it", 10.0, "it", Metrics::new(5.869140625, 7.6875, 5.078125, 0.484375, 5.5625, -2.09375, 5.59375, 5.59375, true)),
    glyph("\\tau", false, "it", 10.0, "it", Metrics::new(6.0205078125, 5.46875, 5.21875, 0.84375, 6.0625, 0.0, 5.46875, 5.46875, true)),
    glyph("\\upsilon", false, "it", 10.0, "it", Metrics::new(5.7861328125, 5.46875, 5.015625, 0.40625, 5.421875, 0.0, 5.46875, 5.46875, true)),
    glyph("\\phi", false, "it", 10.0, "it", Metrics::new(6.5966796875, 9.671875, 6.0, 0.28125, 6.28125, -2.078125, 7.59375, 7.59375, true)),
    glyph("\\varphi", false, "it", 10.0, "it", Metrics::new(6.5966796875, 7.59375, 6.0, 0.484375, 6.484375, -2.078125, 5.515625, 5.515625, true)),
    glyph("\\chi", false, "it", 10.0, "it", Metrics::new(5.91796875, 7.546875, 6.65625, -0.4375, 6.21875, -2.078125, 5.46875, 5.46875, true)),
    glyph("\\psi", false, "it", 10.0, "it", Metrics::new(6.5966796875, 7.546875, 6.3125, 0.4375, 6.75, -2.078125, 5.46875, 5.46875, true)),
    glyph("\\omega", false, "it", 10.0, "it", Metrics::new(8.3740234375, 5.609375, 7.828125, 0.109375, 7.9375, -0.140625, 5.46875, 5.46875, true)),
    glyph("\\Gamma", false, "it", 10.0, "it", Metrics::new(5.5712890625, 7.296875, 4.53125, 0.984375, 5.515625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Delta", false, "it", 10.0, "it", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Theta", false, "it", 10.0, "it", Metrics::new(7.87109375, 7.5625, 6.75, 0.5625, 7.3125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\Lambda", false, "it", 10.0, "it", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Xi", false, "it", 10.0, "it", Metrics::new(6.318359375, 7.296875, 4.5, 0.984375, 5.484375, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Pi", false, "it", 10.0, "it", Metrics::new(7.51953125, 7.296875, 5.546875, 0.984375, 6.53125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Sigma", false, "it", 10.0, "it", Metrics::new(6.318359375, 7.296875, 4.6875, 0.984375, 5.671875, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Upsilon", false, "it", 10.0, "it", Metrics::new(6.1083984375, 7.296875, 6.140625, -0.015625, 6.125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Phi", false, "it", 10.0, "it", Metrics::new(7.87109375, 7.296875, 6.75, 0.5625, 7.3125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Psi", false, "it", 10.0, "it", Metrics::new(7.87109375, 7.296875, 6.75, 0.5625, 7.3125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\Omega", false, "it", 10.0, "it", Metrics::new(7.6416015625, 7.375, 6.890625, 0.375, 7.265625, 0.0, 7.375, 7.375, false)),
    glyph("\\sum", false, "it", 10.0, "it", Metrics::new(6.73828125, 9.109375, 6.40625, 0.125, 6.53125, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\prod", false, "it", 10.0, "it", Metrics::new(7.568359375, 9.109375, 6.03125, 0.765625, 6.796875, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\coprod", false, "it", 10.0, "it", Metrics::new(7.568359375, 9.109375, 6.03125, 0.765625, 6.796875, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\int", false, "it", 10.0, "it", Metrics::new(5.2099609375, 9.6875, 4.0625, 0.578125, 4.640625, -2.125, 7.5625, 7.5625, true)),
    glyph("\\oint", false, "it", 10.0, "it", Metrics::new(5.2099609375, 9.6875, 4.0625, 0.578125, 4.640625, -2.125, 7.5625, 7.5625, true)),
    glyph("\\iint", false, "it", 10.0, "it", Metrics::new(7.890625, 9.6875, 6.734375, 0.578125, 7.3125, -2.125, 7.5625, 7.5625, false)),
    glyph("\\iiint", false, "it", 10.0, "it", Metrics::new(10.5712890625, 9.6875, 9.421875, 0.578125, 10.0, -2.125, 7.5625, 7.5625, false)),
    glyph("\\bigcap", false, "it", 10.0, "it", Metrics::new(8.203125, 9.109375, 6.828125, 0.6875, 7.515625, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\bigcup", false, "it", 10.0, "it", Metrics::new(8.203125, 9.109375, 6.828125, 0.6875, 7.515625, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\bigvee", false, "it", 10.0, "it", Metrics::new(8.203125, 9.109375, 8.265625, -0.03125, 8.234375, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\bigwedge", false, "it", 10.0, "it", Metrics::new(8.203125, 9.109375, 8.265625, -0.03125, 8.234375, -1.921875, 7.1875, 7.1875, false)),
    glyph("\\bigoplus", false, "it", 10.0, "it", Metrics::new(10.0, 9.453125, 9.4375, 0.28125, 9.71875, -1.984375, 7.46875, 7.46875, false)),
    glyph("\\bigotimes", false, "it", 10.0, "it", Metrics::new(10.0, 9.453125, 9.4375, 0.28125, 9.71875, -1.984375, 7.46875, 7.46875, false)),
    glyph("\\pm", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.265625, 6.25, 1.0625, 7.3125, 0.0, 6.265625, 6.265625, false)),
    glyph("\\mp", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.265625, 6.25, 1.0625, 7.3125, 0.0, 6.265625, 6.265625, false)),
    glyph("\\times", false, "it", 10.0, "it", Metrics::new(8.37890625, 5.65625, 5.640625, 1.375, 7.015625, 0.3125, 5.96875, 5.96875, false)),
    glyph("\\div", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.8125, 6.25, 1.0625, 7.3125, 0.734375, 5.546875, 5.546875, false)),
    glyph("\\cdot", false, "it", 10.0, "it", Metrics::new(3.1787109375, 1.234375, 1.03125, 1.0625, 2.09375, 2.859375, 4.09375, 4.09375, false)),
    glyph("\\ast", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.265625, 5.828125, 1.28125, 7.109375, 0.0, 6.265625, 6.265625, false)),
    glyph("\\star", false, "it", 10.0, "it", Metrics::new(6.259765625, 3.640625, 3.828125, 1.21875, 5.046875, 1.484375, 5.125, 5.125, false)),
    glyph("\\circ", false, "it", 10.0, "it", Metrics::new(6.259765625, 3.109375, 3.09375, 1.578125, 4.671875, 1.59375, 4.703125, 4.703125, false)),
    glyph("\\bullet", false, "it", 10.0, "it", Metrics::new(6.259765625, 2.890625, 2.890625, 1.6875, 4.578125, 1.6875, 4.578125, 4.578125, false)),
    glyph("\\cap", false, "it", 10.0, "it", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\cup", false, "it", 10.0, "it", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\uplus", false, "it", 10.0, "it", Metrics::new(7.3193359375, 5.78125, 4.734375, 1.296875, 6.03125, 0.03125, 5.8125, 5.8125, false)),
    glyph("\\sqcap", false, "it", 10.0, "it", Metrics::new(7.802734375, 6.265625, 5.6875, 1.0625, 6.75, 0.0, 6.265625, 6.265625, false)),
    glyph("\\sqcup", false, "it", 10.0, "it", Metrics::new(7.802734375, 6.265625, 5.6875, 1.0625, 6.75, 0.0, 6.265625, 6.265625, false)),
    glyph("\\vee", false, "it", 10.0, "it", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\wedge", false, "it", 10.0, "it", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\setminus", false, "it", 10.0, "it", Metrics::new(6.3671875, 8.21875, 3.375, 1.921875, 5.296875, -0.53125, 7.6875, 7.6875, false)),
    glyph("\\wr", false, "it", 10.0, "it", Metrics::new(3.75, 6.265625, 1.71875, 1.015625, 2.734375, 0.0, 6.265625, 6.265625, false)),
    glyph("\\diamond", false, "it", 10.0, "it", Metrics::new(6.259765625, 4.984375, 4.984375, 0.640625, 5.625, 0.640625, 5.625, 5.625, false)),
    glyph("\\oplus", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\ominus", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\otimes", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\oslash", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\odot", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\bigcirc", false, "it", 10.0, "it", Metrics::new(8.7255859375, 7.703125, 7.625, 0.546875, 8.171875, -1.25, 6.453125, 6.453125, false)),
    glyph("\\dagger", false, "it", 10.0, "it", Metrics::new(5.0, 8.265625, 4.4375, 0.28125, 4.71875, -0.96875, 7.296875, 7.296875, false)),
    glyph("\\ddagger", false, "it", 10.0, "it", Metrics::new(5.0, 8.265625, 4.4375, 0.28125, 4.71875, -0.96875, 7.296875, 7.296875, false)),
    glyph("\\leq", false, "it", 10.0, "it", Metrics::new(8.37890625, 5.828125, 6.25, 1.0625, 7.3125, 0.0, 5.828125, 5.828125, false)),
    glyph("\\geq", false, "it", 10.0, "it", Metrics::new(8.37890625, 5.828125, 6.25, 1.0625, 7.3125, 0.0, 5.828125, 5.828125, false)),
    glyph("\\neq", false, "it", 10.0, "it", Metrics::new(8.37890625, 5.890625, 6.25, 1.0625, 7.3125, 0.1875, 6.078125, 6.078125, false)),
    glyph("\\equiv", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.46875, 6.25, 1.0625, 7.3125, 0.90625, 5.375, 5.375, false)),
    glyph("\\sim", false, "it", 10.0, "it", Metrics::new(8.37890625, 1.71875, 6.25, 1.0625, 7.3125, 2.28125, 4.0, 4.0, false)),
    glyph("\\simeq", false, "it", 10.0, "it", Metrics::new(8.37890625, 3.21875, 6.25, 1.0625, 7.3125, 1.71875, 4.9375, 4.9375, false)),
    glyph("\\approx", false, "it", 10.0, "it", Metrics::new(8.37890625, 3.609375, 6.25, 1.0625, 7.3125, 1.328125, 4.9375, 4.9375, false)),
    glyph("\\cong", false, "it", 10.0, "it", Metrics::new(8.37890625, 5.03125, 6.25, 1.0625, 7.3125, 0.90625, 5.9375, 5.9375, false)),
    glyph("\\propto", false, "it", 10.0, "it", Metrics::new(7.1435546875, 3.75, 4.984375, 1.078125, 6.0625, 1.125, 4.875, 4.875, false)),
    glyph("\\subset", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.671875, 6.390625, 1.0, 7.390625, 0.796875, 5.46875, 5.46875, false)),
    glyph("\\supset", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.671875, 6.390625, 1.0, 7.390625, 0.796875, 5.46875, 5.46875, false)),
    glyph("\\subseteq", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.140625, 6.390625, 0.921875, 7.3125, 0.0, 6.140625, 6.140625, false)),
    glyph("\\supseteq", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.140625, 6.390625, 1.0625, 7.453125, 0.0, 6.140625, 6.140625, false)),
    glyph("\\in", false, "it", 10.0, "it", Metrics::new(8.7109375, 7.1875, 7.0, 0.859375, 7.859375, -0.09375, 7.09375, 7.09375, false)),
    glyph("\\ni", false, "it", 10.0, "it", Metrics::new(8.7109375, 7.1875, 7.0, 0.859375, 7.859375, -0.09375, 7.09375, 7.09375, false)),
    glyph("\\notin", false, "it", 10.0, "it", Metrics::new(8.7109375, 9.734375, 7.0, 0.859375, 7.859375, -1.375, 8.359375, 8.359375, false)),
    glyph("\\ll", false, "it", 10.0, "it", Metrics::new(10.46875, 5.875, 9.03125, 0.71875, 9.75, 0.21875, 6.09375, 6.09375, false)),
    glyph("\\gg", false, "it", 10.0, "it", Metrics::new(10.46875, 5.875, 9.03125, 0.71875, 9.75, 0.21875, 6.09375, 6.09375, false)),
    glyph("\\prec", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.015625, 6.25, 1.0625, 7.3125, -0.375, 6.640625, 6.640625, false)),
    glyph("\\succ", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.015625, 6.25, 1.0625, 7.3125, -0.375, 6.640625, 6.640625, false)),
    glyph("\\mid", false, "it", 10.0, "it", Metrics::new(5.0, 9.84375, 0.78125, 2.109375, 2.890625, -2.140625, 7.703125, 7.703125, false)),
    glyph("\\parallel", false, "it", 10.0, "it", Metrics::new(5.0, 9.84375, 2.34375, 1.328125, 3.671875, -2.140625, 7.703125, 7.703125, false)),
    glyph("\\vdash", false, "it", 10.0, "it", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\dashv", false, "it", 10.0, "it", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\models", false, "it", 10.0, "it", Metrics::new(5.205078125, 7.0, 3.5, 0.859375, 4.359375, 0.0, 7.0, 7.0, false)),
    glyph("\\asymp", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.15625, 6.25, 1.0625, 7.3125, 1.046875, 5.203125, 5.203125, false)),
    glyph("\\doteq", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.53125, 6.25, 1.0625, 7.3125, 1.71875, 6.25, 6.25, false)),
    glyph("\\bowtie", false, "it", 10.0, "it", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\leftarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\rightarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\uparrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.328125, 4.28125, 2.046875, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\downarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.328125, 4.28125, 2.046875, 6.328125, -0.03125, 7.296875, 7.296875, false)),
    glyph("\\leftrightarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.40625, 0.484375, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\updownarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.40625, 4.28125, 2.046875, 6.328125, -0.078125, 7.328125, 7.328125, false)),
    glyph("\\Leftarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Rightarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Uparrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.328125, 4.265625, 2.0625, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\Downarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.328125, 4.265625, 2.0625, 6.328125, -0.03125, 7.296875, 7.296875, false)),
    glyph("\\Leftrightarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.40625, 0.484375, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Updownarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.40625, 4.28125, 2.046875, 6.328125, -0.078125, 7.328125, 7.328125, false)),
    glyph("\\mapsto", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\longleftarrow", false, "it", 10.0, "it", Metrics::new(14.3359375, 4.28125, 13.28125, 0.484375, 13.765625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\longrightarrow", false, "it", 10.0, "it", Metrics::new(14.3359375, 4.28125, 13.265625, 0.578125, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\hookleftarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.65625, 7.3125, 0.484375, 7.796875, 1.0, 5.65625, 5.65625, false)),
    glyph("\\hookrightarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.65625, 7.3125, 0.578125, 7.890625, 1.0, 5.65625, 5.65625, false)),
    glyph("\\nearrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 5.625, 5.625, 1.40625, 7.03125, 0.25, 5.875, 5.875, false)),
    glyph("\\searrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 5.625, 5.625, 1.40625, 7.03125, 0.25, 5.875, 5.875, false)),
    glyph("\\swarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 5.625, 5.625, 1.40625, 7.03125, 0.25, 5.875, 5.875, false)),
    glyph("\\nwarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 5.625, 5.625, 1.40625, 7.03125, 0.25, 5.875, 5.875, false)),
    glyph("\\leftharpoonup", false, "it", 10.0, "it", Metrics::new(8.37890625, 2.5625, 7.328125, 0.484375, 7.8125, 2.71875, 5.28125, 5.28125, false)),
    glyph("\\rightharpoonup", false, "it", 10.0, "it", Metrics::new(8.37890625, 2.5625, 7.3125, 0.578125, 7.890625, 2.71875, 5.28125, 5.28125, false)),
    glyph("\\rightleftharpoons", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.140625, 7.40625, 0.484375, 7.890625, 0.0625, 6.203125, 6.203125, false)),
    glyph("\\infty", false, "it", 10.0, "it", Metrics::new(8.330078125, 3.75, 6.171875, 1.078125, 7.25, 1.125, 4.875, 4.875, false)),
    glyph("\\partial", false, "it", 10.0, "it", Metrics::new(5.1708984375, 6.765625, 4.234375, 0.46875, 4.703125, -0.140625, 6.625, 6.625, false)),
    glyph("\\nabla", false, "it", 10.0, "it", Metrics::new(6.689453125, 7.1875, 6.75, -0.03125, 6.71875, 0.0, 7.1875, 7.1875, false)),
    glyph("\\forall", false, "it", 10.0, "it", Metrics::new(6.8408203125, 7.296875, 6.6875, 0.078125, 6.765625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\exists", false, "it", 10.0, "it", Metrics::new(6.318359375, 7.296875, 4.6875, 0.984375, 5.671875, 0.0, 7.296875, 7.296875, false)),
    glyph("\\neg", false, "it", 10.0, "it", Metrics::new(8.37890625, 2.796875, 6.25, 1.0625, 7.3125, 1.40625, 4.203125, 4.203125, false)),
    glyph("\\emptyset", false, "it", 10.0, "it", Metrics::new(8.7109375, 7.1875, 7.203125, 0.75, 7.953125, -0.09375, 7.09375, 7.09375, false)),
    glyph("\\aleph", false, "it", 10.0, "it", Metrics::new(7.451171875, 7.5625, 6.625, 0.5, 7.125, -0.140625, 7.421875, 7.421875, true)),
    glyph("\\hbar", false, "it", 10.0, "it", Metrics::new(6.9482421875, 7.59375, 5.3125, 0.453125, 5.765625, 0.0, 7.59375, 7.59375, true)),
    glyph("\\ell", false, "it", 10.0, "it", Metrics::new(4.130859375, 7.5625, 3.671875, -0.140625, 3.53125, -0.140625, 7.421875, 7.421875, true)),
    glyph("\\wp", false, "it", 10.0, "it", Metrics::new(6.97265625, 7.171875, 6.046875, 0.53125, 6.578125, -2.21875, 4.953125, 4.953125, false)),
    glyph("\\Re", false, "it", 10.0, "it", Metrics::new(8.1396484375, 7.5625, 7.625, 0.40625, 8.03125, -0.140625, 7.421875, 7.421875, true)),
    glyph("\\Im", false, "it", 10.0, "it", Metrics::new(6.97265625, 7.5625, 6.078125, 0.515625, 6.59375, -0.140625, 7.421875, 7.421875, true)),
    glyph("\\prime", false, "it", 10.0, "it", Metrics::new(2.2705078125, 1.828125, 1.828125, 0.203125, 2.03125, 5.46875, 7.296875, 7.296875, false)),
    glyph("\\angle", false, "it", 10.0, "it", Metrics::new(8.96484375, 7.296875, 7.0, 0.859375, 7.859375, 0.0, 7.296875, 7.296875, false)),
    glyph("\\triangle", false, "it", 10.0, "it", Metrics::new(7.6904296875, 7.65625, 7.625, 0.03125, 7.65625, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\surd", false, "it", 10.0, "it", Metrics::new(6.3720703125, 8.3125, 6.078125, 0.296875, 6.375, -0.203125, 8.109375, 8.109375, false)),
    glyph("\\top", false, "it", 10.0, "it", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\bot", false, "it", 10.0, "it", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\flat", false, "it", 10.0, "it", Metrics::new(4.716796875, 7.34375, 3.03125, 0.890625, 3.921875, -0.03125, 7.3125, 7.3125, false)),
    glyph("\\natural", false, "it", 10.0, "it", Metrics::new(3.57421875, 7.3125, 1.890625, 0.84375, 2.734375, 0.0, 7.3125, 7.3125, false)),
    glyph("\\sharp", false, "it", 10.0, "it", Metrics::new(4.8388671875, 7.3125, 3.15625, 0.84375, 4.0, 0.0, 7.3125, 7.3125, false)),
    glyph("\\clubsuit", false, "it", 10.0, "it", Metrics::new(8.96484375, 7.28125, 6.734375, 1.109375, 7.84375, 0.0, 7.28125, 7.28125, false)),
    glyph("\\diamondsuit", false, "it", 10.0, "it", Metrics::new(8.96484375, 7.28125, 5.59375, 1.6875, 7.28125, 0.0, 7.28125, 7.28125, false)),
    glyph("\\heartsuit", false, "it", 10.0, "it", Metrics::new(8.96484375, 7.265625, 7.15625, 0.90625, 8.0625, 0.0, 7.265625, 7.265625, false)),
    glyph("\\spadesuit", false, "it", 10.0, "it", Metrics::new(8.96484375, 7.28125, 5.8125, 1.578125, 7.390625, 0.0, 7.28125, 7.28125, false)),
    glyph("\\ldots", false, "it", 10.0, "it", Metrics::new(10.0, 1.234375, 7.6875, 1.15625, 8.84375, 0.0, 1.234375, 1.234375, false)),
    glyph("\\cdots", false, "it", 10.0, "it", Metrics::new(10.0, 1.25, 7.6875, 1.15625, 8.84375, 2.484375, 3.734375, 3.734375, false)),
    glyph("\\vdots", false, "it", 10.0, "it", Metrics::new(10.0, 8.078125, 1.03125, 4.484375, 5.515625, -0.921875, 7.15625, 7.15625, false)),
    glyph("\\ddots", false, "it", 10.0, "it", Metrics::new(10.0, 8.078125, 7.6875, 1.15625, 8.84375, -0.921875, 7.15625, 7.15625, false)),
    glyph("\\langle", false, "it", 10.0, "it", Metrics::new(3.9013671875, 8.90625, 2.203125, 0.890625, 3.09375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rangle", false, "it", 10.0, "it", Metrics::new(3.9013671875, 8.90625, 2.21875, 0.796875, 3.015625, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\lfloor", false, "it", 10.0, "it", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.859375, 2.9375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rfloor", false, "it", 10.0, "it", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.96875, 3.046875, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\lceil", false, "it", 10.0, "it", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.859375, 2.9375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rceil", false, "it", 10.0, "it", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.96875, 3.046875, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\lbrace", false, "it", 10.0, "it", Metrics::new(6.3623046875, 9.21875, 3.859375, 1.25, 5.109375, -1.625, 7.59375, 7.59375, false)),
    glyph("\\rbrace", false, "it", 10.0, "it", Metrics::new(6.3623046875, 9.21875, 3.859375, 1.25, 5.109375, -1.625, 7.59375, 7.59375, false)),
    glyph("\\vert", false, "it", 10.0, "it", Metrics::new(3.369140625, 10.0, 0.828125, 1.265625, 2.09375, -2.359375, 7.640625, 7.640625, false)),
    glyph("\\Vert", false, "it", 10.0, "it", Metrics::new(5.0, 10.0, 2.453125, 1.265625, 3.71875, -2.359375, 7.640625, 7.640625, false)),
    glyph("\\backslash", false, "it", 10.0, "it", Metrics::new(3.369140625, 8.21875, 3.375, 0.0, 3.375, -0.921875, 7.296875, 7.296875, false)),
    glyph("\\S", false, "it", 10.0, "it", Metrics::new(5.0, 8.375, 4.09375, 0.453125, 4.546875, -0.953125, 7.421875, 7.421875, false)),
    glyph("\\P", false, "it", 10.0, "it", Metrics::new(6.3623046875, 8.265625, 4.515625, 0.765625, 5.28125, -0.96875, 7.296875, 7.296875, false)),
    glyph("\\copyright", false, "it", 10.0, "it", Metrics::new(10.0, 7.25, 7.25, 1.375, 8.625, 0.0, 7.25, 7.25, false)),
    glyph("\\degree", false, "it", 10.0, "it", Metrics::new(5.0, 3.09375, 3.09375, 0.953125, 4.046875, 4.328125, 7.421875, 7.421875, false)),
    glyph("\\imath", false, "it", 10.0, "it", Metrics::new(2.7783203125, 5.46875, 1.953125, 0.359375, 2.3125, 0.0, 5.46875, 5.46875, true)),
    glyph("\\jmath", false, "it", 10.0, "it", Metrics::new(2.7783203125, 7.546875, 3.46875, -1.125, 2.34375, -2.078125, 5.46875, 5.46875, true)),
    glyph("\\nleftarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\nrightarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\twoheadleftarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\twoheadrightarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\leftarrowtail", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\rightarrowtail", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\mapsfrom", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\mapsup", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.328125, 4.265625, 2.0625, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\mapsdown", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.328125, 4.265625, 2.0625, 6.328125, -0.03125, 7.296875, 7.296875, false)),
    glyph("\\looparrowleft", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.65625, 7.3125, 0.484375, 7.796875, 1.0, 5.65625, 5.65625, false)),
    glyph("\\looparrowright", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.65625, 7.3125, 0.578125, 7.890625, 1.0, 5.65625, 5.65625, false)),
    glyph("\\leftrightsquigarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.40625, 0.484375, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\nleftrightarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.421875, 7.40625, 0.484375, 7.890625, 0.921875, 5.34375, 5.34375, false)),
    glyph("\\Lsh", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.4375, 4.609375, 1.6875, 6.296875, 0.0, 7.4375, 7.4375, false)),
    glyph("\\Rsh", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.4375, 4.59375, 2.09375, 6.6875, 0.0, 7.4375, 7.4375, false)),
    glyph("\\curvearrowleft", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.65625, 7.78125, 0.21875, 8.0, 2.03125, 6.6875, 6.6875, false)),
    glyph("\\curvearrowright", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.65625, 7.765625, 0.390625, 8.15625, 2.03125, 6.6875, 6.6875, false)),
    glyph("\\circlearrowleft", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.171875, 6.59375, 1.03125, 7.625, 0.625, 6.796875, 6.796875, false)),
    glyph("\\circlearrowright", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.171875, 6.59375, 0.765625, 7.359375, 0.625, 6.796875, 6.796875, false)),
    glyph("\\leftharpoondown", false, "it", 10.0, "it", Metrics::new(8.37890625, 2.546875, 7.328125, 0.484375, 7.8125, 1.0, 3.546875, 3.546875, false)),
    glyph("\\upharpoonright", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.328125, 2.546875, 3.78125, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\upharpoonleft", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.328125, 2.5625, 2.046875, 4.609375, 0.0, 7.328125, 7.328125, false)),
    glyph("\\rightharpoondown", false, "it", 10.0, "it", Metrics::new(8.37890625, 2.546875, 7.3125, 0.578125, 7.890625, 1.0, 3.546875, 3.546875, false)),
    glyph("\\downharpoonright", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.328125, 2.546875, 3.78125, 6.328125, 0.0, 7.328125, 7.328125, false)),
    glyph("\\downharpoonleft", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.328125, 2.5625, 2.046875, 4.609375, 0.0, 7.328125, 7.328125, false)),
    glyph("\\rightleftarrows", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.203125, 7.40625, 0.484375, 7.890625, -0.46875, 6.734375, 6.734375, false)),
    glyph("\\leftrightarrows", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.203125, 7.40625, 0.484375, 7.890625, -0.46875, 6.734375, 6.734375, false)),
    glyph("\\leftleftarrows", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.203125, 7.328125, 0.484375, 7.8125, -0.46875, 6.734375, 6.734375, false)),
    glyph("\\upuparrows", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.328125, 7.203125, 0.59375, 7.796875, 0.0, 7.328125, 7.328125, false)),
    glyph("\\rightrightarrows", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.203125, 7.3125, 0.578125, 7.890625, -0.46875, 6.734375, 6.734375, false)),
    glyph("\\downdownarrows", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.328125, 7.203125, 0.59375, 7.796875, -0.03125, 7.296875, 7.296875, false)),
    glyph("\\leftrightharpoons", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.140625, 7.40625, 0.484375, 7.890625, 0.0625, 6.203125, 6.203125, false)),
    glyph("\\nLeftarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\nLeftrightarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.390625, 7.40625, 0.484375, 7.890625, 0.9375, 5.328125, 5.328125, false)),
    glyph("\\nRightarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Lleftarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Rrightarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\leftsquigarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.328125, 0.484375, 7.8125, 1.0, 5.28125, 5.28125, false)),
    glyph("\\rightsquigarrow", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 7.3125, 0.578125, 7.890625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\longleftrightarrow", false, "it", 10.0, "it", Metrics::new(14.3359375, 4.28125, 13.359375, 0.484375, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Longleftarrow", false, "it", 10.0, "it", Metrics::new(14.3359375, 4.28125, 13.28125, 0.484375, 13.765625, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Longrightarrow", false, "it", 10.0, "it", Metrics::new(14.3359375, 4.28125, 13.265625, 0.578125, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\Longleftrightarrow", false, "it", 10.0, "it", Metrics::new(14.3359375, 4.28125, 13.359375, 0.484375, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\longmapsto", false, "it", 10.0, "it", Metrics::new(14.3359375, 4.28125, 13.265625, 0.578125, 13.84375, 1.0, 5.28125, 5.28125, false)),
    glyph("\\nmid", false, "it", 10.0, "it", Metrics::new(5.0, 9.84375, 4.0, 0.5, 4.5, -2.140625, 7.703125, 7.703125, false)),
    glyph("\\nparallel", false, "it", 10.0, "it", Metrics::new(5.0, 9.84375, 4.0, 0.5, 4.5, -2.140625, 7.703125, 7.703125, false)),
    glyph("\\backsim", false, "it", 10.0, "it", Metrics::new(8.37890625, 1.71875, 6.25, 1.0625, 7.3125, 2.28125, 4.0, 4.0, false)),
    glyph("\\nsim", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.765625, 6.25, 1.0625, 7.3125, 0.765625, 5.53125, 5.53125, false)),
    glyph("\\eqsim", false, "it", 10.0, "it", Metrics::new(8.37890625, 3.21875, 6.25, 1.0625, 7.3125, 1.328125, 4.546875, 4.546875, false)),
    glyph("\\ncong", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.625, 6.25, 1.0625, 7.3125, -0.046875, 6.578125, 6.578125, false)),
    glyph("\\napprox", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.21875, 6.25, 1.0625, 7.3125, 0.03125, 6.25, 6.25, false)),
    glyph("\\approxeq", false, "it", 10.0, "it", Metrics::new(8.37890625, 5.078125, 6.25, 1.0625, 7.3125, 0.90625, 5.984375, 5.984375, false)),
    glyph("\\allequal", false, "it", 10.0, "it", Metrics::new(8.37890625, 5.03125, 6.25, 1.0625, 7.3125, 0.90625, 5.9375, 5.9375, false)),
    glyph("\\Bumpeq", false, "it", 10.0, "it", Metrics::new(8.37890625, 5.734375, 6.25, 1.0625, 7.3125, 0.265625, 6.0, 6.0, false)),
    glyph("\\bumpeq", false, "it", 10.0, "it", Metrics::new(8.37890625, 4.28125, 6.25, 1.0625, 7.3125, 1.71875, 6.0, 6.0, false)),
    glyph("\\Doteq", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.234375, 6.25, 1.0625, 7.3125, 0.015625, 6.25, 6.25, false)),
    glyph("\\fallingdotseq", false, "it", 10.0, "it", Metrics::new(8.388671875, 6.21875, 6.265625, 1.0625, 7.328125, 0.03125, 6.25, 6.25, false)),
    glyph("\\risingdotseq", false, "it", 10.0, "it", Metrics::new(8.388671875, 6.21875, 6.265625, 1.0625, 7.328125, 0.03125, 6.25, 6.25, false)),
    glyph("\\coloneq", false, "it", 10.0, "it", Metrics::new(10.0, 3.25, 7.984375, 1.015625, 9.0, 1.515625, 4.765625, 4.765625, false)),
    glyph("\\eqcolon", false, "it", 10.0, "it", Metrics::new(10.0, 3.234375, 8.0, 1.0, 9.0, 1.515625, 4.75, 4.75, false)),
    glyph("\\eqcirc", false, "it", 10.0, "it", Metrics::new(8.37890625, 2.828125, 6.25, 1.0625, 7.3125, 1.71875, 4.546875, 4.546875, false)),
    glyph("\\circeq", false, "it", 10.0, "it", Metrics::new(8.37890625, 5.890625, 6.25, 1.0625, 7.3125, 1.71875, 7.609375, 7.609375, false)),
    glyph("\\wedgeq", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.40625, 6.25, 1.0625, 7.3125, 1.71875, 8.125, 8.125, false)),
    glyph("\\veeeq", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.40625, 6.25, 1.0625, 7.3125, 1.71875, 8.125, 8.125, false)),
    glyph("\\stareq", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.765625, 6.25, 1.0625, 7.3125, 1.71875, 8.484375, 8.484375, false)),
    glyph("\\triangleq", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.8125, 6.25, 1.0625, 7.3125, 1.71875, 8.53125, 8.53125, false)),
    glyph("\\nequiv", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.75, 6.25, 1.0625, 7.3125, -0.25, 6.5, 6.5, false)),
    glyph("\\leqq", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.203125, 6.265625, 1.0625, 7.328125, -0.828125, 6.375, 6.375, false)),
    glyph("\\geqq", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.203125, 6.265625, 1.0625, 7.328125, -0.828125, 6.375, 6.375, false)),
    glyph("\\lneqq", false, "it", 10.0, "it", Metrics::new(8.37890625, 8.015625, 6.265625, 1.0625, 7.328125, -1.640625, 6.375, 6.375, false)),
    glyph("\\gneqq", false, "it", 10.0, "it", Metrics::new(8.37890625, 8.015625, 6.265625, 1.0625, 7.328125, -1.640625, 6.375, 6.375, false)),
    glyph("\\between", false, "it", 10.0, "it", Metrics::new(4.638671875, 8.90625, 2.921875, 0.859375, 3.78125, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\nless", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.703125, 6.25, 1.0625, 7.3125, 0.03125, 6.734375, 6.734375, false)),
    glyph("\\ngtr", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.71875, 6.25, 1.0625, 7.3125, -0.46875, 6.25, 6.25, false)),
    glyph("\\nleq", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.6875, 6.25, 1.0625, 7.3125, -1.015625, 6.671875, 6.671875, false)),
    glyph("\\ngeq", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.6875, 6.25, 1.0625, 7.3125, -1.015625, 6.671875, 6.671875, false)),
    glyph("\\lesssim", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.375, 6.265625, 1.0625, 7.328125, -0.546875, 5.828125, 5.828125, false)),
    glyph("\\gtrsim", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.21875, 6.265625, 1.0625, 7.328125, -0.390625, 5.828125, 5.828125, false)),
    glyph("\\lessgtr", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.734375, 6.3125, 1.015625, 7.328125, -0.875, 6.859375, 6.859375, false)),
    glyph("\\gtrless", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.734375, 6.3125, 1.015625, 7.328125, -0.875, 6.859375, 6.859375, false)),
    glyph("\\preccurlyeq", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.71875, 6.25, 1.0625, 7.3125, -1.046875, 6.671875, 6.671875, false)),
    glyph("\\succcurlyeq", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.71875, 6.25, 1.0625, 7.3125, -1.046875, 6.671875, 6.671875, false)),
    glyph("\\precsim", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.515625, 6.25, 1.0625, 7.3125, -0.84375, 6.671875, 6.671875, false)),
    glyph("\\succsim", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.515625, 6.25, 1.0625, 7.3125, -0.84375, 6.671875, 6.671875, false)),
    glyph("\\nprec", false, "it", 10.0, "it", Metrics::new(8.37890625, 8.25, 6.25, 1.0625, 7.3125, -0.609375, 7.640625, 7.640625, false)),
    glyph("\\nsucc", false, "it", 10.0, "it", Metrics::new(8.37890625, 8.25, 6.25, 1.0625, 7.3125, -1.375, 6.875, 6.875, false)),
    glyph("\\nsubset", false, "it", 10.0, "it", Metrics::new(8.37890625, 8.234375, 6.390625, 1.0, 7.390625, -0.96875, 7.265625, 7.265625, false)),
    glyph("\\nsupset", false, "it", 10.0, "it", Metrics::new(8.37890625, 8.21875, 6.390625, 1.0, 7.390625, -1.0, 7.21875, 7.21875, false)),
    glyph("\\nsubseteq", false, "it", 10.0, "it", Metrics::new(8.37890625, 8.453125, 6.390625, 0.921875, 7.3125, -1.15625, 7.296875, 7.296875, false)),
    glyph("\\nsupseteq", false, "it", 10.0, "it", Metrics::new(8.37890625, 8.453125, 6.390625, 1.0625, 7.453125, -1.15625, 7.296875, 7.296875, false)),
    glyph("\\subsetneq", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.875, 6.390625, 0.921875, 7.3125, -0.734375, 6.140625, 6.140625, false)),
    glyph("\\supsetneq", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.875, 6.390625, 0.921875, 7.3125, -0.734375, 6.140625, 6.140625, false)),
    glyph("\\sqsubset", false, "it", 10.0, "it", Metrics::new(8.37890625, 5.671875, 6.25, 1.0625, 7.3125, 0.0, 5.671875, 5.671875, false)),
    glyph("\\sqsupset", false, "it", 10.0, "it", Metrics::new(8.37890625, 5.671875, 6.25, 1.0625, 7.3125, 0.0, 5.671875, 5.671875, false)),
    glyph("\\sqsubseteq", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.125, 6.25, 1.0625, 7.3125, -0.828125, 6.296875, 6.296875, false)),
    glyph("\\sqsupseteq", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.125, 6.25, 1.0625, 7.3125, -0.828125, 6.296875, 6.296875, false)),
    glyph("\\vDash", false, "it", 10.0, "it", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\Vdash", false, "it", 10.0, "it", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\Vvdash", false, "it", 10.0, "it", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\VDash", false, "it", 10.0, "it", Metrics::new(8.7109375, 7.0, 7.0, 0.859375, 7.859375, 0.0, 7.0, 7.0, false)),
    glyph("\\nvdash", false, "it", 10.0, "it", Metrics::new(8.7109375, 7.78125, 7.0, 0.859375, 7.859375, -0.390625, 7.390625, 7.390625, false)),
    glyph("\\nvDash", false, "it", 10.0, "it", Metrics::new(8.7109375, 7.78125, 7.0, 0.859375, 7.859375, -0.390625, 7.390625, 7.390625, false)),
    glyph("\\nVdash", false, "it", 10.0, "it", Metrics::new(8.7109375, 7.78125, 7.0, 0.859375, 7.859375, -0.390625, 7.390625, 7.390625, false)),
    glyph("\\nVDash", false, "it", 10.0, "it", Metrics::new(8.7109375, 7.78125, 7.0, 0.859375, 7.859375, -0.390625, 7.390625, 7.390625, false)),
    glyph("\\vartriangleleft", false, "it", 10.0, "it", Metrics::new(8.37890625, 5.984375, 6.25, 1.0625, 7.3125, 0.140625, 6.125, 6.125, false)),
    glyph("\\vartriangleright", false, "it", 10.0, "it", Metrics::new(8.37890625, 5.984375, 6.25, 1.0625, 7.3125, 0.140625, 6.125, 6.125, false)),
    glyph("\\trianglelefteq", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.21875, 6.25, 1.0625, 7.3125, -0.484375, 6.734375, 6.734375, false)),
    glyph("\\trianglerighteq", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.21875, 6.25, 1.0625, 7.3125, -0.484375, 6.734375, 6.734375, false)),
    glyph("\\multimap", false, "it", 10.0, "it", Metrics::new(8.37890625, 2.796875, 7.421875, 0.484375, 7.90625, 1.75, 4.546875, 4.546875, false)),
    glyph("\\backsimeq", false, "it", 10.0, "it", Metrics::new(8.37890625, 3.21875, 6.25, 1.0625, 7.3125, 1.71875, 4.9375, 4.9375, false)),
    glyph("\\Subset", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.328125, 6.390625, 0.921875, 7.3125, -0.03125, 6.296875, 6.296875, false)),
    glyph("\\Supset", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.328125, 6.390625, 1.0625, 7.453125, -0.03125, 6.296875, 6.296875, false)),
    glyph("\\pitchfork", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.296875, 4.671875, 1.859375, 6.53125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\lessdot", false, "it", 10.0, "it", Metrics::new(8.37890625, 5.359375, 6.25, 1.0625, 7.3125, 0.453125, 5.8125, 5.8125, false)),
    glyph("\\gtrdot", false, "it", 10.0, "it", Metrics::new(8.37890625, 5.359375, 6.25, 1.0625, 7.3125, 0.453125, 5.8125, 5.8125, false)),
    glyph("\\lll", false, "it", 10.0, "it", Metrics::new(14.2236328125, 5.875, 12.78125, 0.71875, 13.5, 0.21875, 6.09375, 6.09375, false)),
    glyph("\\ggg", false, "it", 10.0, "it", Metrics::new(14.2236328125, 5.875, 12.78125, 0.71875, 13.5, 0.21875, 6.09375, 6.09375, false)),
    glyph("\\lesseqgtr", false, "it", 10.0, "it", Metrics::new(8.37890625, 10.8125, 6.25, 1.0625, 7.3125, -2.28125, 8.53125, 8.53125, false)),
    glyph("\\gtreqless", false, "it", 10.0, "it", Metrics::new(8.37890625, 10.8125, 6.25, 1.0625, 7.3125, -2.28125, 8.53125, 8.53125, false)),
    glyph("\\curlyeqprec", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.71875, 6.25, 1.0625, 7.3125, -1.046875, 6.671875, 6.671875, false)),
    glyph("\\curlyeqsucc", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.71875, 6.25, 1.0625, 7.3125, -1.046875, 6.671875, 6.671875, false)),
    glyph("\\npreccurlyeq", false, "it", 10.0, "it", Metrics::new(8.37890625, 9.421875, 6.25, 1.0625, 7.3125, -1.78125, 7.640625, 7.640625, false)),
    glyph("\\nsucccurlyeq", false, "it", 10.0, "it", Metrics::new(8.37890625, 9.421875, 6.25, 1.0625, 7.3125, -1.78125, 7.640625, 7.640625, false)),
    glyph("\\nsqsubseteq", false, "it", 10.0, "it", Metrics::new(8.37890625, 9.078125, 6.25, 1.0625, 7.3125, -1.40625, 7.671875, 7.671875, false)),
    glyph("\\nsqsupseteq", false, "it", 10.0, "it", Metrics::new(8.37890625, 9.078125, 6.25, 1.0625, 7.3125, -1.40625, 7.671875, 7.671875, false)),
    glyph("\\lnsim", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.203125, 6.265625, 1.0625, 7.328125, -1.375, 5.828125, 5.828125, false)),
    glyph("\\gnsim", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.203125, 6.265625, 1.0625, 7.328125, -1.375, 5.828125, 5.828125, false)),
    glyph("\\precnsim", false, "it", 10.0, "it", Metrics::new(8.37890625, 8.359375, 6.25, 1.0625, 7.3125, -1.6875, 6.671875, 6.671875, false)),
    glyph("\\succnsim", false, "it", 10.0, "it", Metrics::new(8.37890625, 8.375, 6.265625, 1.09375, 7.359375, -1.703125, 6.671875, 6.671875, false)),
    glyph("\\ntriangleleft", false, "it", 10.0, "it", Metrics::new(8.37890625, 8.859375, 6.25, 1.0625, 7.3125, -1.296875, 7.5625, 7.5625, false)),
    glyph("\\ntriangleright", false, "it", 10.0, "it", Metrics::new(8.37890625, 8.859375, 6.25, 1.0625, 7.3125, -1.296875, 7.5625, 7.5625, false)),
    glyph("\\ntrianglelefteq", false, "it", 10.0, "it", Metrics::new(8.37890625, 10.046875, 6.25, 1.0625, 7.3125, -1.890625, 8.15625, 8.15625, false)),
    glyph("\\ntrianglerighteq", false, "it", 10.0, "it", Metrics::new(8.37890625, 10.046875, 6.25, 1.046875, 7.296875, -1.890625, 8.15625, 8.15625, false)),
    glyph("\\leqslant", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.046875, 6.25, 1.0625, 7.3125, -1.234375, 5.8125, 5.8125, false)),
    glyph("\\geqslant", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.046875, 6.25, 1.0625, 7.3125, -1.234375, 5.8125, 5.8125, false)),
    glyph("\\lessapprox", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.953125, 6.265625, 1.0625, 7.328125, -1.328125, 6.625, 6.625, false)),
    glyph("\\gtrapprox", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.953125, 6.265625, 1.0625, 7.328125, -1.328125, 6.625, 6.625, false)),
    glyph("\\lneq", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.03125, 6.25, 1.0625, 7.3125, -1.203125, 5.828125, 5.828125, false)),
    glyph("\\gneq", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.03125, 6.25, 1.0625, 7.3125, -1.203125, 5.828125, 5.828125, false)),
    glyph("\\lnapprox", false, "it", 10.0, "it", Metrics::new(8.37890625, 8.65625, 6.265625, 1.0625, 7.328125, -2.03125, 6.625, 6.625, false)),
    glyph("\\gnapprox", false, "it", 10.0, "it", Metrics::new(8.37890625, 8.65625, 6.265625, 1.0625, 7.328125, -2.03125, 6.625, 6.625, false)),
    glyph("\\lesseqqgtr", false, "it", 10.0, "it", Metrics::new(8.37890625, 11.015625, 6.25, 1.0625, 7.3125, -3.109375, 7.90625, 7.90625, false)),
    glyph("\\gtreqqless", false, "it", 10.0, "it", Metrics::new(8.37890625, 11.015625, 6.25, 1.0625, 7.3125, -3.109375, 7.90625, 7.90625, false)),
    glyph("\\eqslantless", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.046875, 6.25, 1.0625, 7.3125, -0.609375, 6.4375, 6.4375, false)),
    glyph("\\eqslantgtr", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.046875, 6.25, 1.0625, 7.3125, -0.609375, 6.4375, 6.4375, false)),
    glyph("\\preceq", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.90625, 6.25, 1.0625, 7.3125, -0.234375, 6.671875, 6.671875, false)),
    glyph("\\succeq", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.90625, 6.25, 1.0625, 7.3125, -0.234375, 6.671875, 6.671875, false)),
    glyph("\\precneqq", false, "it", 10.0, "it", Metrics::new(8.37890625, 8.5625, 6.25, 1.0625, 7.3125, -1.953125, 6.609375, 6.609375, false)),
    glyph("\\succneqq", false, "it", 10.0, "it", Metrics::new(8.37890625, 8.5625, 6.25, 1.0625, 7.3125, -1.953125, 6.609375, 6.609375, false)),
    glyph("\\precapprox", false, "it", 10.0, "it", Metrics::new(8.37890625, 8.828125, 6.25, 1.0625, 7.3125, -1.90625, 6.921875, 6.921875, false)),
    glyph("\\succapprox", false, "it", 10.0, "it", Metrics::new(8.37890625, 8.828125, 6.25, 1.0625, 7.3125, -1.90625, 6.921875, 6.921875, false)),
    glyph("\\precnapprox", false, "it", 10.0, "it", Metrics::new(8.37890625, 9.515625, 6.265625, 1.0625, 7.328125, -2.59375, 6.921875, 6.921875, false)),
    glyph("\\succnapprox", false, "it", 10.0, "it", Metrics::new(8.37890625, 9.515625, 6.265625, 1.0625, 7.328125, -2.59375, 6.921875, 6.921875, false)),
    glyph("\\dotplus", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.296875, 6.25, 1.0625, 7.3125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\smallsetminus", false, "it", 10.0, "it", Metrics::new(6.3671875, 8.21875, 3.375, 1.921875, 5.296875, -0.53125, 7.6875, 7.6875, false)),
    glyph("\\dotminus", false, "it", 10.0, "it", Metrics::new(8.37890625, 2.796875, 6.25, 1.0625, 7.3125, 2.71875, 5.515625, 5.515625, false)),
    glyph("\\cupdot", false, "it", 10.0, "it", Metrics::new(7.3193359375, 5.796875, 4.734375, 1.296875, 6.03125, 0.0, 5.796875, 5.796875, false)),
    glyph("\\circledcirc", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\circledast", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\circleddash", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\boxplus", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\boxminus", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\boxtimes", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\boxdot", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.5625, 6.5625, 0.90625, 7.46875, -0.140625, 6.421875, 6.421875, false)),
    glyph("\\intercal", false, "it", 10.0, "it", Metrics::new(5.205078125, 7.0, 2.890625, 1.15625, 4.046875, 0.0, 7.0, 7.0, false)),
    glyph("\\veebar", false, "it", 10.0, "it", Metrics::new(7.3193359375, 7.40625, 5.359375, 0.984375, 6.34375, 0.0, 7.40625, 7.40625, false)),
    glyph("\\barwedge", false, "it", 10.0, "it", Metrics::new(7.3193359375, 7.40625, 5.359375, 0.984375, 6.34375, 0.0, 7.40625, 7.40625, false)),
    glyph("\\barvee", false, "it", 10.0, "it", Metrics::new(7.3193359375, 7.40625, 5.359375, 0.984375, 6.34375, 0.0, 7.40625, 7.40625, false)),
    glyph("\\divideontimes", false, "it", 10.0, "it", Metrics::new(8.37890625, 5.984375, 6.25, 1.0625, 7.3125, 0.140625, 6.125, 6.125, false)),
    glyph("\\ltimes", false, "it", 10.0, "it", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\rtimes", false, "it", 10.0, "it", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\leftthreetimes", false, "it", 10.0, "it", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\rightthreetimes", false, "it", 10.0, "it", Metrics::new(10.0, 6.875, 7.875, 1.0625, 8.9375, -0.296875, 6.578125, 6.578125, false)),
    glyph("\\curlyvee", false, "it", 10.0, "it", Metrics::new(7.32421875, 5.796875, 6.359375, 0.484375, 6.84375, 0.0, 5.796875, 5.796875, false)),
    glyph("\\curlywedge", false, "it", 10.0, "it", Metrics::new(7.32421875, 5.796875, 6.359375, 0.484375, 6.84375, 0.0, 5.796875, 5.796875, false)),
    glyph("\\Cap", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.625, 6.328125, 1.03125, 7.359375, 0.0, 6.625, 6.625, false)),
    glyph("\\Cup", false, "it", 10.0, "it", Metrics::new(8.37890625, 6.625, 6.328125, 1.03125, 7.359375, -0.140625, 6.484375, 6.484375, false)),
    glyph("\\doublebarwedge", false, "it", 10.0, "it", Metrics::new(8.37890625, 5.125, 4.28125, 2.046875, 6.328125, 0.0, 5.125, 5.125, false)),
    glyph("\\bigodot", false, "it", 10.0, "it", Metrics::new(10.0, 9.453125, 9.4375, 0.28125, 9.71875, -1.984375, 7.46875, 7.46875, false)),
    glyph("\\oiint", false, "it", 10.0, "it", Metrics::new(7.890625, 9.6875, 6.734375, 0.578125, 7.3125, -2.125, 7.5625, 7.5625, false)),
    glyph("\\oiiint", false, "it", 10.0, "it", Metrics::new(10.5712890625, 9.6875, 9.421875, 0.578125, 10.0, -2.125, 7.5625, 7.5625, false)),
    glyph("\\iiiint", false, "it", 10.0, "it", Metrics::new(13.251953125, 9.6875, 12.109375, 0.578125, 12.6875, -2.125, 7.5625, 7.5625, false)),
    glyph("\\minus", false, "it", 10.0, "it", Metrics::new(8.37890625, 0.828125, 6.25, 1.0625, 7.3125, 2.71875, 3.546875, 3.546875, false)),
    glyph("\\cdotp", false, "it", 10.0, "it", Metrics::new(3.1787109375, 1.234375, 1.03125, 1.0625, 2.09375, 2.859375, 4.09375, 4.09375, false)),
    glyph("\\hslash", false, "it", 10.0, "it", Metrics::new(6.337890625, 7.59375, 5.4375, 0.4375, 5.875, 0.0, 7.59375, 7.59375, true)),
    glyph("\\beth", false, "it", 10.0, "it", Metrics::new(6.73828125, 7.5625, 6.5625, -0.03125, 6.53125, -0.140625, 7.421875, 7.421875, true)),
    glyph("\\gimel", false, "it", 10.0, "it", Metrics::new(4.658203125, 7.765625, 3.9375, 0.125, 4.0625, -0.34375, 7.421875, 7.421875, true)),
    glyph("\\daleth", false, "it", 10.0, "it", Metrics::new(6.4453125, 7.765625, 5.484375, 0.421875, 5.90625, -0.34375, 7.421875, 7.421875, true)),
    glyph("\\mho", false, "it", 10.0, "it", Metrics::new(7.6416015625, 7.375, 6.890625, 0.375, 7.265625, -0.140625, 7.234375, 7.234375, false)),
    glyph("\\eth", false, "it", 10.0, "it", Metrics::new(6.1181640625, 7.734375, 5.421875, 0.453125, 5.875, -0.140625, 7.59375, 7.59375, true)),
    glyph("\\Finv", false, "it", 10.0, "it", Metrics::new(5.751953125, 7.296875, 5.609375, 0.265625, 5.875, 0.0, 7.296875, 7.296875, true)),
    glyph("\\Game", false, "it", 10.0, "it", Metrics::new(7.7490234375, 7.5625, 6.359375, 0.796875, 7.15625, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\digamma", false, "it", 10.0, "it", Metrics::new(4.5849609375, 9.671875, 6.828125, -1.828125, 5.0, -2.078125, 7.59375, 7.59375, true)),
    glyph("\\varkappa", false, "it", 10.0, "it", Metrics::new(6.6357421875, 6.109375, 6.609375, -0.03125, 6.578125, -0.34375, 5.765625, 5.765625, true)),
    glyph("\\backepsilon", false, "it", 10.0, "it", Metrics::new(6.15234375, 5.734375, 4.25, 0.953125, 5.203125, -0.140625, 5.59375, 5.59375, false)),
    glyph("\\AA", false, "it", 10.0, "it", Metrics::new(6.8408203125, 9.28125, 6.6875, -0.53125, 6.15625, 0.0, 9.28125, 9.28125, true)),
    glyph("\\ae", false, "it", 10.0, "it", Metrics::new(9.951171875, 5.734375, 9.109375, 0.40625, 9.515625, -0.140625, 5.59375, 5.59375, true)),
    glyph("\\AE", false, "it", 10.0, "it", Metrics::new(9.7412109375, 7.296875, 10.390625, -0.453125, 9.9375, 0.0, 7.296875, 7.296875, true)),
    glyph("\\oe", false, "it", 10.0, "it", Metrics::new(10.2783203125, 5.734375, 9.390625, 0.453125, 9.84375, -0.140625, 5.59375, 5.59375, true)),
    glyph("\\OE", false, "it", 10.0, "it", Metrics::new(10.6982421875, 7.296875, 10.21875, 0.453125, 10.671875, 0.0, 7.296875, 7.296875, true)),
    glyph("\\o", false, "it", 10.0, "it", Metrics::new(6.1181640625, 6.359375, 6.359375, -0.140625, 6.21875, -0.453125, 5.90625, 5.90625, true)),
    glyph("\\O", false, "it", 10.0, "it", Metrics::new(7.87109375, 7.9375, 8.4375, -0.34375, 8.09375, -0.328125, 7.609375, 7.609375, true)),
    glyph("\\ss", false, "it", 10.0, "it", Metrics::new(6.298828125, 7.734375, 5.4375, 0.46875, 5.90625, -0.140625, 7.59375, 7.59375, true)),
    glyph("\\l", false, "it", 10.0, "it", Metrics::new(2.87109375, 7.59375, 3.0, 0.171875, 3.171875, 0.0, 7.59375, 7.59375, true)),
    glyph("\\L", false, "it", 10.0, "it", Metrics::new(5.6201171875, 7.296875, 5.21875, -0.203125, 5.015625, 0.0, 7.296875, 7.296875, true)),
    glyph("\\complement", false, "it", 10.0, "it", Metrics::new(6.3623046875, 7.5625, 4.875, 0.65625, 5.53125, -0.140625, 7.421875, 7.421875, false)),
    glyph("\\nexists", false, "it", 10.0, "it", Metrics::new(6.318359375, 8.21875, 4.6875, 0.984375, 5.671875, -0.453125, 7.765625, 7.765625, false)),
    glyph("\\varnothing", false, "it", 10.0, "it", Metrics::new(8.7109375, 7.1875, 7.203125, 0.75, 7.953125, -0.09375, 7.09375, 7.09375, false)),
    glyph("\\smallin", false, "it", 10.0, "it", Metrics::new(7.177734375, 4.75, 5.0625, 1.0625, 6.125, 0.75, 5.5, 5.5, false)),
    glyph("\\QED", false, "it", 10.0, "it", Metrics::new(6.3623046875, 4.859375, 3.421875, 1.46875, 4.890625, 0.0, 4.859375, 4.859375, false)),
    glyph("\\measuredangle", false, "it", 10.0, "it", Metrics::new(8.96484375, 7.828125, 7.0, 0.859375, 7.859375, -0.53125, 7.296875, 7.296875, false)),
    glyph("\\sphericalangle", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.296875, 6.171875, 1.15625, 7.328125, -0.03125, 7.265625, 7.265625, false)),
    glyph("\\rightangle", false, "it", 10.0, "it", Metrics::new(8.37890625, 5.625, 5.625, 1.375, 7.0, 0.984375, 6.609375, 6.609375, false)),
    glyph("\\therefore", false, "it", 10.0, "it", Metrics::new(6.3623046875, 5.046875, 5.171875, 0.59375, 5.765625, 1.0, 6.046875, 6.046875, false)),
    glyph("\\because", false, "it", 10.0, "it", Metrics::new(6.3623046875, 5.046875, 5.171875, 0.59375, 5.765625, 1.0, 6.046875, 6.046875, false)),
    glyph("\\Colon", false, "it", 10.0, "it", Metrics::new(6.3623046875, 5.046875, 5.171875, 0.59375, 5.765625, 1.0, 6.046875, 6.046875, false)),
    glyph("\\lnot", false, "it", 10.0, "it", Metrics::new(8.37890625, 2.796875, 6.25, 1.0625, 7.3125, 1.40625, 4.203125, 4.203125, false)),
    glyph("\\sqrt", false, "it", 10.0, "it", Metrics::new(6.3720703125, 8.3125, 6.078125, 0.296875, 6.375, -0.203125, 8.109375, 8.109375, false)),
    glyph("\\dots", false, "it", 10.0, "it", Metrics::new(10.0, 1.234375, 7.6875, 1.15625, 8.84375, 0.0, 1.234375, 1.234375, false)),
    glyph("\\adots", false, "it", 10.0, "it", Metrics::new(10.0, 8.078125, 7.6875, 1.15625, 8.84375, -0.921875, 7.15625, 7.15625, false)),
    glyph("\\ulcorner", false, "it", 10.0, "it", Metrics::new(4.6875, 3.34375, 3.171875, 0.859375, 4.03125, 4.25, 7.59375, 7.59375, false)),
    glyph("\\urcorner", false, "it", 10.0, "it", Metrics::new(4.6875, 3.34375, 3.171875, 0.65625, 3.828125, 4.25, 7.59375, 7.59375, false)),
    glyph("\\llcorner", false, "it", 10.0, "it", Metrics::new(4.6875, 3.34375, 3.171875, 0.859375, 4.03125, -0.703125, 2.640625, 2.640625, false)),
    glyph("\\lrcorner", false, "it", 10.0, "it", Metrics::new(4.6875, 3.34375, 3.171875, 0.65625, 3.828125, -0.703125, 2.640625, 2.640625, false)),
    glyph("\\lbrack", false, "it", 10.0, "it", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.859375, 2.9375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rbrack", false, "it", 10.0, "it", Metrics::new(3.9013671875, 8.90625, 2.078125, 0.96875, 3.046875, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\leftparen", false, "it", 10.0, "it", Metrics::new(3.9013671875, 8.90625, 2.234375, 0.859375, 3.09375, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\rightparen", false, "it", 10.0, "it", Metrics::new(3.9013671875, 8.90625, 2.25, 0.796875, 3.046875, -1.3125, 7.59375, 7.59375, false)),
    glyph("\\bigtriangleup", false, "it", 10.0, "it", Metrics::new(7.6904296875, 7.65625, 7.625, 0.03125, 7.65625, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\vartriangle", false, "it", 10.0, "it", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\blacktriangle", false, "it", 10.0, "it", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\triangleright", false, "it", 10.0, "it", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\blacktriangleright", false, "it", 10.0, "it", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\bigtriangledown", false, "it", 10.0, "it", Metrics::new(7.6904296875, 7.65625, 7.625, 0.03125, 7.65625, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\triangledown", false, "it", 10.0, "it", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\blacktriangledown", false, "it", 10.0, "it", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\triangleleft", false, "it", 10.0, "it", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\blacktriangleleft", false, "it", 10.0, "it", Metrics::new(5.01953125, 4.984375, 4.953125, 0.03125, 4.984375, 0.109375, 5.09375, 5.09375, false)),
    glyph("\\lozenge", false, "it", 10.0, "it", Metrics::new(4.94140625, 10.40625, 4.875, 0.03125, 4.90625, -2.328125, 8.078125, 8.078125, false)),
    glyph("\\blacksquare", false, "it", 10.0, "it", Metrics::new(9.4482421875, 7.65625, 7.640625, 0.90625, 8.546875, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\square", false, "it", 10.0, "it", Metrics::new(9.4482421875, 7.65625, 7.640625, 0.90625, 8.546875, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\Box", false, "it", 10.0, "it", Metrics::new(9.4482421875, 7.65625, 7.640625, 0.90625, 8.546875, -1.234375, 6.421875, 6.421875, false)),
    glyph("\\bigstar", false, "it", 10.0, "it", Metrics::new(8.96484375, 7.28125, 7.65625, 0.65625, 8.3125, -0.046875, 7.234375, 7.234375, false)),
    glyph("\\diagup", false, "it", 10.0, "it", Metrics::new(6.0205078125, 11.6875, 6.890625, -0.4375, 6.453125, -2.40625, 9.28125, 9.28125, false)),
    glyph("\\diagdown", false, "it", 10.0, "it", Metrics::new(6.0205078125, 11.6875, 6.890625, -0.4375, 6.453125, -2.40625, 9.28125, 9.28125, false)),
    glyph("\\varspadesuit", false, "it", 10.0, "it", Metrics::new(8.96484375, 7.296875, 5.8125, 1.578125, 7.390625, 0.0, 7.296875, 7.296875, false)),
    glyph("\\varheartsuit", false, "it", 10.0, "it", Metrics::new(8.96484375, 7.28125, 7.1875, 0.890625, 8.078125, 0.0, 7.28125, 7.28125, false)),
    glyph("\\vardiamondsuit", false, "it", 10.0, "it", Metrics::new(8.96484375, 7.28125, 5.59375, 1.6875, 7.28125, 0.0, 7.28125, 7.28125, false)),
    glyph("\\varclubsuit", false, "it", 10.0, "it", Metrics::new(8.96484375, 7.328125, 6.75, 1.109375, 7.859375, 0.0, 7.328125, 7.328125, false)),
    glyph("\\checkmark", false, "it", 10.0, "it", Metrics::new(8.37890625, 5.328125, 5.171875, 1.5, 6.671875, 0.96875, 6.296875, 6.296875, false)),
    glyph("\\maltese", false, "it", 10.0, "it", Metrics::new(8.37890625, 7.296875, 7.28125, 0.546875, 7.828125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\sun", false, "it", 10.0, "it", Metrics::new(8.96484375, 7.3125, 7.3125, 0.828125, 8.140625, 0.0, 7.3125, 7.3125, false)),
    glyph("\\mercury", false, "it", 10.0, "it", Metrics::new(6.1376953125, 8.328125, 4.421875, 0.859375, 5.28125, -1.015625, 7.3125, 7.3125, false)),
    glyph("\\venus", false, "it", 10.0, "it", Metrics::new(7.32421875, 8.5625, 5.609375, 0.859375, 6.46875, -1.25, 7.3125, 7.3125, false)),
    glyph("\\earth", false, "it", 10.0, "it", Metrics::new(7.32421875, 8.5625, 5.609375, 0.859375, 6.46875, -0.140625, 8.421875, 8.421875, false)),
    glyph("\\mars", false, "it", 10.0, "it", Metrics::new(8.96484375, 7.34375, 7.515625, 0.796875, 8.3125, -0.140625, 7.203125, 7.203125, false)),
    glyph("\\jupiter", false, "it", 10.0, "it", Metrics::new(8.96484375, 7.3125, 5.640625, 1.65625, 7.296875, 0.0, 7.3125, 7.3125, false)),
    glyph("\\saturn", false, "it", 10.0, "it", Metrics::new(8.96484375, 7.3125, 4.578125, 2.1875, 6.765625, 0.0, 7.3125, 7.3125, false)),
    glyph("\\uranus", false, "it", 10.0, "it", Metrics::new(8.96484375, 7.3125, 6.53125, 1.21875, 7.75, 0.0, 7.3125, 7.3125, false)),
    glyph("\\neptune", false, "it", 10.0, "it", Metrics::new(8.96484375, 7.3125, 6.421875, 1.265625, 7.6875, 0.0, 7.3125, 7.3125, false)),
    glyph("\\pluto", false, "it", 10.0, "it", Metrics::new(8.96484375, 7.3125, 4.15625, 2.40625, 6.5625, 0.0, 7.3125, 7.3125, false)),
    glyph("\\male", false, "it", 10.0, "it", Metrics::new(8.96484375, 7.34375, 7.515625, 0.796875, 8.3125, -0.140625, 7.203125, 7.203125, false)),
    glyph("\\female", false, "it", 10.0, "it", Metrics::new(7.32421875, 8.5625, 5.609375, 0.859375, 6.46875, -1.25, 7.3125, 7.3125, false)),
    glyph("\\circledR", false, "it", 10.0, "it", Metrics::new(10.0, 7.25, 7.25, 1.375, 8.625, 0.0, 7.25, 7.25, false)),
    glyph("\\yen", false, "it", 10.0, "it", Metrics::new(6.3623046875, 7.296875, 5.546875, 0.40625, 5.953125, 0.0, 7.296875, 7.296875, false)),
    glyph("\\sterling", false, "it", 10.0, "it", Metrics::new(6.3623046875, 7.421875, 4.859375, 0.625, 5.484375, 0.0, 7.421875, 7.421875, false)),
    glyph("\\cent", false, "it", 10.0, "it", Metrics::new(6.3623046875, 8.53125, 4.328125, 0.84375, 5.171875, -1.53125, 7.0, 7.0, false)),
    glyph("\\backprime", false, "it", 10.0, "it", Metrics::new(2.2705078125, 1.828125, 1.828125, 0.203125, 2.03125, 5.46875, 7.296875, 7.296875, false)),
    glyph("\\dag", false, "it", 10.0, "it", Metrics::new(5.0, 8.265625, 4.4375, 0.28125, 4.71875, -0.96875, 7.296875, 7.296875, false)),
    glyph("\\ddag", false, "it", 10.0, "it", Metrics::new(5.0, 8.265625, 4.4375, 0.28125, 4.71875, -0.96875, 7.296875, 7.296875, false)),
    glyph("é", false, "it", 10.0, "it", Metrics::new(6.15234375, 8.140625, 5.3125, 0.453125, 5.765625, -0.140625, 8.0, 8.0, true)),
    glyph(" ", false, "it", 10.0, "it", Metrics::new(3.1787109375, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, false)),
    glyph("a", false, "it", 12.0, "it", Metrics::new(7.353515625, 6.890625, 6.0625, 0.5, 6.5625, -0.171875, 6.71875, 6.71875, true)),
    glyph("b", false, "it", 12.0, "it", Metrics::new(7.6171875, 9.296875, 6.609375, 0.4375, 7.046875, -0.171875, 9.125, 9.125, true)),
    glyph("c", false, "it", 12.0, "it", Metrics::new(6.59765625, 6.890625, 5.890625, 0.546875, 6.4375, -0.171875, 6.71875, 6.71875, true)),
    glyph("d", false, "it", 12.0, "it", Metrics::new(7.6171875, 9.296875, 7.125, 0.546875, 7.671875, -0.171875, 9.125, 9.125, true)),
    glyph("e", false, "it", 12.0, "it", Metrics::new(7.3828125, 6.890625, 6.296875, 0.546875, 6.84375, -0.171875, 6.71875, 6.71875, true)),
    glyph("f", false, "it", 12.0, "it", Metrics::new(4.224609375, 9.125, 4.921875, 0.8125, 5.734375, 0.0, 9.125, 9.125, true)),
    glyph("g", false, "it", 12.0, "it", Metrics::new(7.6171875, 9.21875, 6.765625, 0.390625, 7.15625, -2.5, 6.71875, 6.71875, true)),
    glyph("h", false, "it", 12.0, "it", Metrics::new(7.60546875, 9.125, 6.375, 0.421875, 6.796875, 0.0, 9.125, 9.125, true)),
    glyph("i", false, "it", 12.0, "it", Metrics::new(3.333984375, 9.125, 2.859375, 0.421875, 3.28125, 0.0, 9.125, 9.125, true)),
    glyph("j", false, "it", 12.0, "it", Metrics::new(3.333984375, 11.625, 4.6875, -1.359375, 3.328125, -2.5, 9.125, 9.125, true)),
    glyph("k", false, "it", 12.0, "it", Metrics::new(6.94921875, 9.125, 6.921875, 0.421875, 7.34375, 0.0, 9.125, 9.125, true)),
    glyph("l", false, "it", 12.0, "it", Metrics::new(3.333984375, 9.125, 2.859375, 0.421875, 3.28125, 0.0, 9.125, 9.125, true)),
    glyph("m", false, "it", 12.0, "it", Metrics::new(11.689453125, 6.71875, 10.453125, 0.421875, 10.875, 0.0, 6.71875, 6.71875, true)),
    glyph("n", false, "it", 12.0, "it", Metrics::new(7.60546875, 6.71875, 6.375, 0.421875, 6.796875, 0.0, 6.71875, 6.71875, true)),
    glyph("o", false, "it", 12.0, "it", Metrics::new(7.341796875, 6.890625, 6.25, 0.546875, 6.796875, -0.171875, 6.71875, 6.71875, true)),
    glyph("p", false, "it", 12.0, "it", Metrics::new(7.6171875, 9.21875, 7.09375, -0.03125, 7.0625, -2.5, 6.71875, 6.71875, true)),
    glyph("q", false, "it", 12.0, "it", Metrics::new(7.6171875, 9.1875, 6.625, 0.546875, 7.171875, -2.46875, 6.71875, 6.71875, true)),
    glyph("r", false, "it", 12.0, "it", Metrics::new(4.93359375, 6.71875, 5.140625, 0.421875, 5.5625, 0.0, 6.71875, 6.71875, true)),
    glyph("s", false, "it", 12.0, "it", Metrics::new(6.251953125, 6.890625, 5.859375, 0.140625, 6.0, -0.171875, 6.71875, 6.71875, true)),
    glyph("t", false, "it", 12.0, "it", Metrics::new(4.705078125, 8.421875, 4.3125, 0.765625, 5.078125, 0.0, 8.421875, 8.421875, true)),
    glyph("u", false, "it", 12.0, "it", Metrics::new(7.60546875, 6.734375, 6.375, 0.6875, 7.0625, -0.171875, 6.5625, 6.5625, true)),
    glyph("v", false, "it", 12.0, "it", Metrics::new(7.1015625, 6.5625, 6.390625, 0.859375, 7.25, 0.0, 6.5625, 6.5625, true)),
    glyph("w", false, "it", 12.0, "it", Metrics::new(9.814453125, 6.5625, 8.8125, 1.015625, 9.828125, 0.0, 6.5625, 6.5625, true)),
    glyph("x", false, "it", 12.0, "it", Metrics::new(7.1015625, 6.5625, 7.515625, -0.3125, 7.203125, 0.0, 6.5625, 6.5625, true)),
    glyph("y", false, "it", 12.0, "it", Metrics::new(7.1015625, 9.0625, 7.53125, -0.296875, 7.234375, -2.5, 6.5625, 6.5625, true)),
    glyph("z", false, "it", 12.0, "it", Metrics::new(6.298828125, 6.5625, 6.546875, -0.03125, 6.515625, 0.0, 6.5625, 6.5625, true)),
    glyph("A", false, "it", 12.0, "it", Metrics::new(8.208984375, 8.75, 8.03125, -0.640625, 7.390625, 0.0, 8.75, 8.75, true)),
    glyph("B", false, "it", 12.0, "it", Metrics::new(8.232421875, 8.75, 7.171875, 0.328125, 7.5, 0.0, 8.75, 8.75, true)),
    glyph("C", false, "it", 12.0, "it", Metrics::new(8.37890625, 9.078125, 7.84375, 0.5, 8.34375, -0.171875, 8.90625, 8.90625, true)),
    glyph("D", false, "it", 12.0, "it", Metrics::new(9.240234375, 8.75, 8.34375, 0.328125, 8.671875, 0.0, 8.75, 8.75, true)),
    glyph("E", false, "it", 12.0, "it", Metrics::new(7.58203125, 8.75, 7.234375, 0.328125, 7.5625, 0.0, 8.75, 8.75, true)),
    glyph("F", false, "it", 12.0, "it", Metrics::new(6.90234375, 8.75, 6.71875, 0.328125, 7.046875, 0.0, 8.75, 8.75, true)),
    glyph("G", false, "it", 12.0, "it", Metrics::new(9.298828125, 9.078125, 8.15625, 0.546875, 8.703125, -0.171875, 8.90625, 8.90625, true)),
    glyph("H", false, "it", 12.0, "it", Metrics::new(9.0234375, 8.75, 8.375, 0.328125, 8.703125, 0.0, 8.75, 8.75, true)),
    glyph("I", false, "it", 12.0, "it", Metrics::new(3.5390625, 8.75, 2.890625, 0.328125, 3.21875, 0.0, 8.75, 8.75, true)),
    glyph("J", false, "it", 12.0, "it", Metrics::new(3.5390625, 11.15625, 5.15625, -1.96875, 3.1875, -2.40625, 8.75, 8.75, true)),
    glyph("K", false, "it", 12.0, "it", Metrics::new(7.869140625, 8.75, 8.34375, 0.328125, 8.671875, 0.0, 8.75, 8.75, true)),
    glyph("L", false, "it", 12.0, "it", Metrics::new(6.685546875, 8.75, 5.640625, 0.328125, 5.96875, 0.0, 8.75, 8.75, true)),
    glyph("M", false, "it", 12.0, "it", Metrics::new(10.353515625, 8.75, 9.703125, 0.328125, 10.03125, 0.0, 8.75, 8.75, true)),
    glyph("N", false, "it", 12.0, "it", Metrics::new(8.9765625, 8.75, 8.328125, 0.328125, 8.65625, 0.0, 8.75, 8.75, true)),
    glyph("O", false, "it", 12.0, "it", Metrics::new(9.4453125, 9.078125, 8.484375, 0.484375, 8.96875, -0.171875, 8.90625, 8.90625, true)),
    glyph("P", false, "it", 12.0, "it", Metrics::new(7.236328125, 8.75, 6.890625, 0.328125, 7.21875, 0.0, 8.75, 8.75, true)),
    glyph("Q", false, "it", 12.0, "it", Metrics::new(9.4453125, 10.453125, 8.46875, 0.5, 8.96875, -1.546875, 8.90625, 8.90625, true)),
    glyph("R", false, "it", 12.0, "it", Metrics::new(8.337890625, 8.75, 6.875, 0.328125, 7.203125, 0.0, 8.75, 8.75, true)),
    glyph("S", false, "it", 12.0, "it", Metrics::new(7.6171875, 9.078125, 7.15625, 0.078125, 7.234375, -0.171875, 8.90625, 8.90625, true)),
    glyph("T", false, "it", 12.0, "it", Metrics::new(7.330078125, 8.75, 7.59375, 0.515625, 8.109375, 0.0, 8.75, 8.75, true)),
    glyph("U", false, "it", 12.0, "it", Metrics::new(8.783203125, 8.921875, 7.859375, 0.703125, 8.5625, -0.171875, 8.75, 8.75, true)),
    glyph("V", false, "it", 12.0, "it", Metrics::new(8.208984375, 8.75, 7.96875, 0.9375, 8.90625, 0.0, 8.75, 8.75, true)),
    glyph("W", false, "it", 12.0, "it", Metrics::new(11.865234375, 8.75, 11.078125, 1.15625, 12.234375, 0.0, 8.75, 8.75, true)),
    glyph("X", false, "it", 12.0, "it", Metrics::new(8.220703125, 8.75, 8.953125, -0.515625, 8.4375, 0.0, 8.75, 8.75, true)),
    glyph("Y", false, "it", 12.0, "it", Metrics::new(7.330078125, 8.75, 7.359375, 0.75, 8.109375, 0.0, 8.75, 8.75, true)),
    glyph("Z", false, "it", 12.0, "it", Metrics::new(8.220703125, 8.75, 8.703125, -0.265625, 8.4375, 0.0, 8.75, 8.75, true)),
    glyph("\\alpha", false, "it", 12.0, "it", Metrics::new(7.91015625, 6.890625, 7.390625, 0.34375, 7.734375, -0.15625, 6.734375, 6.734375, true)),
    glyph("\\beta", false, "it", 12.0, "it", Metrics::new(7.658203125, 11.6875, 7.3125, -0.015625, 7.296875, -2.5, 9.1875, 9.1875, true)),
    glyph("\\gamma", false, "it", 12.0, "it", Metrics::new(7.1015625, 9.0625, 6.734375, 0.890625, 7.625, -2.5, 6.5625, 6.5625, true)),
    glyph("\\delta", false, "it", 12.0, "it", Metrics::new(7.341796875, 9.078125, 6.640625, 0.140625, 6.78125, -0.171875, 8.90625, 8.90625, true)),
    glyph("\\epsilon", false, "it", 12.0, "it", Metrics::new(7.3828125, 6.890625, 6.046875, 0.34375, 6.390625, -0.171875, 6.71875, 6.71875, true)),
    glyph("\\varepsilon", false, "it", 12.0, "it", Metrics::new(6.486328125, 6.90625, 5.59375, 0.46875, 6.0625, -0.171875, 6.734375, 6.734375, true)),
    glyph("\\zeta", false, "it", 12.0, "it", Metrics::new(6.52734375, 11.640625, 7.125, -0.046875, 7.078125, -2.515625, 9.125, 9.125, true)),
    glyph("\\eta", false, "it", 12.0, "it", Metrics::new(7.60546875, 9.21875, 6.515625, 0.6875, 7.203125, -2.5, 6.71875, 6.71875, true)),
    glyph("\\theta", false, "it", 12.0, "it", Metrics::new(7.341796875, 9.359375, 6.875, 0.234375, 7.109375, -0.140625, 9.21875, 9.21875, true)),
    glyph("\\vartheta", false, "it", 12.0, "it", Metrics::new(7.4296875, 9.359375, 6.984375, 0.1875, 7.171875, -0.140625, 9.21875, 9.21875, true)),
    glyph("\\iota", false, "it", 12.0, "it", Metrics::new(4.060546875, 6.5625, 2.625, 0.5625, 3.1875, 0.0, 6.5625, 6.5625, true)),
    glyph("\\kappa", false, "it", 12.0, "it", Metrics::new(7.072265625, 6.5625, 6.53125, 0.484375, 7.015625, 0.0, 6.5625, 6.5625, true)),
    glyph("\\lambda", false, "it", 12.0, "it", Metrics::new(7.1015625, 9.125, 6.390625, -0.53125, 5.859375, 0.0, 9.125, 9.125, true)),
    glyph("\\mu", false, "it", 12.0, "it", Metrics::new(7.634765625, 9.0625, 7.265625, -0.15625, 7.109375, -2.5, 6.5625, 6.5625, true)),
    glyph("\\nu", false, "it", 12.0, "it", Metrics::new(6.703125, 6.5625, 5.328125, 1.078125, 6.40625, 0.0, 6.5625, 6.5625, true)),
    glyph("\\xi", false, "it", 12.0, "it", Metrics::new(6.69140625, 11.640625, 6.8125, -0.046875, 6.765625, -2.515625, 9.125, 9.125, true)),
    glyph("\\pi", false, "it", 12.0, "it", Metrics::new(7.224609375, 6.796875, 6.734375, 0.65625, 7.390625, -0.234375, 6.5625, 6.5625, true)),
    glyph("\\varpi", false, "it", 12.0, "it", Metrics::new(10.048828125, 6.734375, 10.15625, 0.140625, 10.296875, -0.171875, 6.5625, 6.5625, true)),
    glyph("\\rho", false, "it", 12.0, "it", Metrics::new(7.6171875, 9.21875, 7.296875, 0.1875, 7.484375, -2.5, 6.71875, 6.71875, true)),
    glyph("\\varrho", false, "it", 12.0, "it", Metrics::new(7.6171875, 9.21875, 7.34375, 0.140625, 7.484375, -2.5, 6.71875, 6.71875, true)),
    glyph("\\sigma", false, "it", 12.0, "it", Metrics::new(7.60546875, 6.734375, 7.546875, 0.359375, 7.90625, -0.171875, 6.5625, 6.5625, true)),
    glyph("\\varsigma", false, "it", 12.0, "it", Metrics::new(7.04296875, 9.234375, 6.09375, 0.578125, 6.671875, -2.515625, 6.71875, 6.71875, true)),
    glyph("\\tau", false, "it", 12.0, "it", Metrics::new(7.224609375, 6.5625, 6.265625, 1.015625, 7.28125, 0.0, 6.5625, 6.5625, true)),
    glyph("\\upsilon", false, "it", 12.0, "it", Metrics::new(6.943359375, 6.5625, 6.03125, 0.484375, 6.515625, 0.0, 6.5625, 6.5625, true)),
    glyph("\\phi", false, "it", 12.0, "it", Metrics::new(7.916015625, 11.625, 7.203125, 0.328125, 7.53125, -2.5, 9.125, 9.125, true)),
    glyph("\\varphi", false, "it", 12.0, "it", Metrics::new(7.916015625, 9.109375, 7.203125, 0.578125, 7.78125, -2.5, 6.609375, 6.609375, true)),
    glyph("\\chi", false, "it", 12.0, "it", Metrics::new(7.1015625, 9.0625, 8.0, -0.53125, 7.46875, -2.5, 6.5625, 6.5625, true)),
    glyph("\\psi", false, "it", 12.0, "it", Metrics::new(7.916015625, 9.0625, 7.59375, 0.515625, 8.109375, -2.5, 6.5625, 6.5625, true)),
    glyph("\\omega", false, "it", 12.0, "it", Metrics::new(10.048828125, 6.734375, 9.375, 0.140625, 9.515625, -0.171875, 6.5625, 6.5625, true)),
    glyph("\\Gamma", false, "it", 12.0, "it", Metrics::new(6.685546875, 8.75, 5.453125, 1.171875, 6.625, 0.0, 8.75, 8.75, false)),
    glyph("\\Delta", false, "it", 12.0, "it", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("\\Theta", false, "it", 12.0, "it", Metrics::new(9.4453125, 9.078125, 8.09375, 0.671875, 8.765625, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\Lambda", false, "it", 12.0, "it", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("\\Xi", false, "it", 12.0, "it", Metrics::new(7.58203125, 8.75, 5.40625, 1.171875, 6.578125, 0.0, 8.75, 8.75, false)),
    glyph("\\Pi", false, "it", 12.0, "it", Metrics::new(9.0234375, 8.75, 6.671875, 1.171875, 7.84375, 0.0, 8.75, 8.75, false)),
    glyph("\\Sigma", false, "it", 12.0, "it", Metrics::new(7.58203125, 8.75, 5.640625, 1.171875, 6.8125, 0.0, 8.75, 8.75, false)),
    glyph("\\Upsilon", false, "it", 12.0, "it", Metrics::new(7.330078125, 8.75, 7.375, -0.015625, 7.359375, 0.0, 8.75, 8.75, false)),
    glyph("\\Phi", false, "it", 12.0, "it", Metrics::new(9.4453125, 8.75, 8.09375, 0.671875, 8.765625, 0.0, 8.75, 8.75, false)),
    glyph("\\Psi", false, "it", 12.0, "it", Metrics::new(9.4453125, 8.75, 8.109375, 0.671875, 8.78125, 0.0, 8.75, 8.75, false)),
    glyph("\\Omega", false, "it", 12.0, "it", Metrics::new(9.169921875, 8.859375, 8.265625, 0.453125, 8.71875, 0.0, 8.859375, 8.859375, false)),
    glyph("\\sum", false, "it", 12.0, "it", Metrics::new(8.0859375, 10.921875, 7.703125, 0.140625, 7.84375, -2.296875, 8.625, 8.625, false)),
    glyph("\\prod", false, "it", 12.0, "it", Metrics::new(9.08203125, 10.921875, 7.234375, 0.921875, 8.15625, -2.296875, 8.625, 8.625, false)),
    glyph("\\coprod", false, "it", 12.0, "it", Metrics::new(9.08203125, 10.921875, 7.234375, 0.921875, 8.15625, -2.296875, 8.625, 8.625, false)),
    glyph("\\int", false, "it", 12.0, "it", Metrics::new(6.251953125, 11.625, 4.875, 0.6875, 5.5625, -2.546875, 9.078125, 9.078125, true)),
    glyph("\\oint", false, "it", 12.0, "it", Metrics::new(6.251953125, 11.625, 4.875, 0.6875, 5.5625, -2.546875, 9.078125, 9.078125, true)),
    glyph("\\iint", false, "it", 12.0, "it", Metrics::new(9.46875, 11.625, 8.09375, 0.6875, 8.78125, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\iiint", false, "it", 12.0, "it", Metrics::new(12.685546875, 11.625, 11.3125, 0.6875, 12.0, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\bigcap", false, "it", 12.0, "it", Metrics::new(9.84375, 10.921875, 8.203125, 0.828125, 9.03125, -2.296875, 8.625, 8.625, false)),
    glyph("\\bigcup", false, "it", 12.0, "it", Metrics::new(9.84375, 10.921875, 8.203125, 0.828125, 9.03125, -2.296875, 8.625, 8.625, false)),
    glyph("\\bigvee", false, "it", 12.0, "it", Metrics::new(9.84375, 10.921875, 9.90625, -0.03125, 9.875, -2.296875, 8.625, 8.625, false)),
    glyph("\\bigwedge", false, "it", 12.0, "it", Metrics::new(9.84375, 10.921875, 9.90625, -0.03125, 9.875, -2.296875, 8.625, 8.625, false)),
    glyph("\\bigoplus", false, "it", 12.0, "it", Metrics::new(12.0, 11.34375, 11.3125, 0.34375, 11.65625, -2.375, 8.96875, 8.96875, false)),
    glyph("\\bigotimes", false, "it", 12.0, "it", Metrics::new(12.0, 11.34375, 11.3125, 0.34375, 11.65625, -2.375, 8.96875, 8.96875, false)),
    glyph("\\pm", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.53125, 7.515625, 1.265625, 8.78125, 0.0, 7.53125, 7.53125, false)),
    glyph("\\mp", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.53125, 7.515625, 1.265625, 8.78125, 0.0, 7.53125, 7.53125, false)),
    glyph("\\times", false, "it", 12.0, "it", Metrics::new(10.0546875, 6.78125, 6.78125, 1.640625, 8.421875, 0.375, 7.15625, 7.15625, false)),
    glyph("\\div", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.78125, 7.515625, 1.265625, 8.78125, 0.875, 6.65625, 6.65625, false)),
    glyph("\\cdot", false, "it", 12.0, "it", Metrics::new(3.814453125, 1.484375, 1.234375, 1.28125, 2.515625, 3.421875, 4.90625, 4.90625, false)),
    glyph("\\ast", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.53125, 7.0, 1.53125, 8.53125, 0.0, 7.53125, 7.53125, false)),
    glyph("\\star", false, "it", 12.0, "it", Metrics::new(7.51171875, 4.359375, 4.59375, 1.453125, 6.046875, 1.78125, 6.140625, 6.140625, false)),
    glyph("\\circ", false, "it", 12.0, "it", Metrics::new(7.51171875, 3.71875, 3.703125, 1.90625, 5.609375, 1.921875, 5.640625, 5.640625, false)),
    glyph("\\bullet", false, "it", 12.0, "it", Metrics::new(7.51171875, 3.46875, 3.484375, 2.015625, 5.5, 2.015625, 5.484375, 5.484375, false)),
    glyph("\\cap", false, "it", 12.0, "it", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\cup", false, "it", 12.0, "it", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\uplus", false, "it", 12.0, "it", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.03125, 6.984375, 6.984375, false)),
    glyph("\\sqcap", false, "it", 12.0, "it", Metrics::new(9.36328125, 7.515625, 6.828125, 1.265625, 8.09375, 0.0, 7.515625, 7.515625, false)),
    glyph("\\sqcup", false, "it", 12.0, "it", Metrics::new(9.36328125, 7.515625, 6.828125, 1.265625, 8.09375, 0.0, 7.515625, 7.515625, false)),
    glyph("\\vee", false, "it", 12.0, "it", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\wedge", false, "it", 12.0, "it", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\setminus", false, "it", 12.0, "it", Metrics::new(7.640625, 9.859375, 4.046875, 2.3125, 6.359375, -0.640625, 9.21875, 9.21875, false)),
    glyph("\\wr", false, "it", 12.0, "it", Metrics::new(4.5, 7.515625, 2.0625, 1.21875, 3.28125, 0.0, 7.515625, 7.515625, false)),
    glyph("\\diamond", false, "it", 12.0, "it", Metrics::new(7.51171875, 5.984375, 5.984375, 0.765625, 6.75, 0.765625, 6.75, 6.75, false)),
    glyph("\\oplus", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\ominus", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\otimes", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\oslash", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\odot", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\bigcirc", false, "it", 12.0, "it", Metrics::new(10.470703125, 9.234375, 9.15625, 0.65625, 9.8125, -1.5, 7.734375, 7.734375, false)),
    glyph("\\dagger", false, "it", 12.0, "it", Metrics::new(6.0, 9.90625, 5.34375, 0.328125, 5.671875, -1.15625, 8.75, 8.75, false)),
    glyph("\\ddagger", false, "it", 12.0, "it", Metrics::new(6.0, 9.90625, 5.34375, 0.328125, 5.671875, -1.15625, 8.75, 8.75, false)),
    glyph("\\leq", false, "it", 12.0, "it", Metrics::new(10.0546875, 6.984375, 7.515625, 1.265625, 8.78125, 0.0, 6.984375, 6.984375, false)),
    glyph("\\geq", false, "it", 12.0, "it", Metrics::new(10.0546875, 6.984375, 7.515625, 1.265625, 8.78125, 0.0, 6.984375, 6.984375, false)),
    glyph("\\neq", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.0625, 7.515625, 1.265625, 8.78125, 0.234375, 7.296875, 7.296875, false)),
    glyph("\\equiv", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.375, 7.515625, 1.265625, 8.78125, 1.078125, 6.453125, 6.453125, false)),
    glyph("\\sim", false, "it", 12.0, "it", Metrics::new(10.0546875, 2.0625, 7.515625, 1.265625, 8.78125, 2.734375, 4.796875, 4.796875, false)),
    glyph("\\simeq", false, "it", 12.0, "it", Metrics::new(10.0546875, 3.875, 7.515625, 1.265625, 8.78125, 2.0625, 5.9375, 5.9375, false)),
    glyph("\\approx", false, "it", 12.0, "it", Metrics::new(10.0546875, 4.34375, 7.515625, 1.265625, 8.78125, 1.59375, 5.9375, 5.9375, false)),
    glyph("\\cong", false, "it", 12.0, "it", Metrics::new(10.0546875, 6.046875, 7.515625, 1.265625, 8.78125, 1.078125, 7.125, 7.125, false)),
    glyph("\\propto", false, "it", 12.0, "it", Metrics::new(8.572265625, 4.5, 5.984375, 1.296875, 7.28125, 1.34375, 5.84375, 5.84375, false)),
    glyph("\\subset", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.609375, 7.65625, 1.203125, 8.859375, 0.953125, 6.5625, 6.5625, false)),
    glyph("\\supset", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.609375, 7.65625, 1.203125, 8.859375, 0.953125, 6.5625, 6.5625, false)),
    glyph("\\subseteq", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.359375, 7.671875, 1.109375, 8.78125, 0.0, 7.359375, 7.359375, false)),
    glyph("\\supseteq", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.359375, 7.671875, 1.265625, 8.9375, 0.0, 7.359375, 7.359375, false)),
    glyph("\\in", false, "it", 12.0, "it", Metrics::new(10.453125, 8.625, 8.390625, 1.03125, 9.421875, -0.109375, 8.515625, 8.515625, false)),
    glyph("\\ni", false, "it", 12.0, "it", Metrics::new(10.453125, 8.625, 8.390625, 1.03125, 9.421875, -0.109375, 8.515625, 8.515625, false)),
    glyph("\\notin", false, "it", 12.0, "it", Metrics::new(10.453125, 11.6875, 8.390625, 1.03125, 9.421875, -1.65625, 10.03125, 10.03125, false)),
    glyph("\\ll", false, "it", 12.0, "it", Metrics::new(12.5625, 7.046875, 10.828125, 0.875, 11.703125, 0.265625, 7.3125, 7.3125, false)),
    glyph("\\gg", false, "it", 12.0, "it", Metrics::new(12.5625, 7.046875, 10.828125, 0.875, 11.703125, 0.265625, 7.3125, 7.3125, false)),
    glyph("\\prec", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.421875, 7.515625, 1.265625, 8.78125, -0.453125, 7.96875, 7.96875, false)),
    glyph("\\succ", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.421875, 7.515625, 1.265625, 8.78125, -0.453125, 7.96875, 7.96875, false)),
    glyph("\\mid", false, "it", 12.0, "it", Metrics::new(6.0, 11.8125, 0.9375, 2.53125, 3.46875, -2.5625, 9.25, 9.25, false)),
    glyph("\\parallel", false, "it", 12.0, "it", Metrics::new(6.0, 11.8125, 2.8125, 1.59375, 4.40625, -2.5625, 9.25, 9.25, false)),
    glyph("\\vdash", false, "it", 12.0, "it", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\dashv", false, "it", 12.0, "it", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\models", false, "it", 12.0, "it", Metrics::new(6.24609375, 8.40625, 4.203125, 1.03125, 5.234375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\asymp", false, "it", 12.0, "it", Metrics::new(10.0546875, 4.984375, 7.515625, 1.265625, 8.78125, 1.265625, 6.25, 6.25, false)),
    glyph("\\doteq", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.4375, 7.515625, 1.265625, 8.78125, 2.0625, 7.5, 7.5, false)),
    glyph("\\bowtie", false, "it", 12.0, "it", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\leftarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\rightarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\uparrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.796875, 5.140625, 2.453125, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\downarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.796875, 5.140625, 2.453125, 7.59375, -0.046875, 8.75, 8.75, false)),
    glyph("\\leftrightarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.875, 0.59375, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\updownarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.890625, 5.140625, 2.453125, 7.59375, -0.09375, 8.796875, 8.796875, false)),
    glyph("\\Leftarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Rightarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Uparrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.796875, 5.125, 2.46875, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\Downarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.796875, 5.125, 2.46875, 7.59375, -0.046875, 8.75, 8.75, false)),
    glyph("\\Leftrightarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.875, 0.59375, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Updownarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.890625, 5.125, 2.46875, 7.59375, -0.09375, 8.796875, 8.796875, false)),
    glyph("\\mapsto", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\longleftarrow", false, "it", 12.0, "it", Metrics::new(17.203125, 5.125, 15.921875, 0.59375, 16.515625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\longrightarrow", false, "it", 12.0, "it", Metrics::new(17.203125, 5.125, 15.9375, 0.6875, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\hookleftarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.578125, 8.765625, 0.59375, 9.359375, 1.203125, 6.78125, 6.78125, false)),
    glyph("\\hookrightarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.578125, 8.78125, 0.6875, 9.46875, 1.203125, 6.78125, 6.78125, false)),
    glyph("\\nearrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 6.734375, 6.75, 1.6875, 8.4375, 0.3125, 7.046875, 7.046875, false)),
    glyph("\\searrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 6.734375, 6.75, 1.6875, 8.4375, 0.3125, 7.046875, 7.046875, false)),
    glyph("\\swarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 6.734375, 6.75, 1.6875, 8.4375, 0.3125, 7.046875, 7.046875, false)),
    glyph("\\nwarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 6.734375, 6.75, 1.6875, 8.4375, 0.3125, 7.046875, 7.046875, false)),
    glyph("\\leftharpoonup", false, "it", 12.0, "it", Metrics::new(10.0546875, 3.0625, 8.78125, 0.59375, 9.375, 3.265625, 6.328125, 6.328125, false)),
    glyph("\\rightharpoonup", false, "it", 12.0, "it", Metrics::new(10.0546875, 3.0625, 8.78125, 0.6875, 9.46875, 3.265625, 6.328125, 6.328125, false)),
    glyph("\\rightleftharpoons", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.359375, 8.875, 0.59375, 9.46875, 0.078125, 7.4375, 7.4375, false)),
    glyph("\\infty", false, "it", 12.0, "it", Metrics::new(9.99609375, 4.5, 7.40625, 1.296875, 8.703125, 1.34375, 5.84375, 5.84375, false)),
    glyph("\\partial", false, "it", 12.0, "it", Metrics::new(6.205078125, 8.125, 5.09375, 0.5625, 5.65625, -0.171875, 7.953125, 7.953125, false)),
    glyph("\\nabla", false, "it", 12.0, "it", Metrics::new(8.02734375, 8.625, 8.09375, -0.03125, 8.0625, 0.0, 8.625, 8.625, false)),
    glyph("\\forall", false, "it", 12.0, "it", Metrics::new(8.208984375, 8.75, 8.015625, 0.09375, 8.109375, 0.0, 8.75, 8.75, false)),
    glyph("\\exists", false, "it", 12.0, "it", Metrics::new(7.58203125, 8.75, 5.640625, 1.171875, 6.8125, 0.0, 8.75, 8.75, false)),
    glyph("\\neg", false, "it", 12.0, "it", Metrics::new(10.0546875, 3.359375, 7.515625, 1.265625, 8.78125, 1.6875, 5.046875, 5.046875, false)),
    glyph("\\emptyset", false, "it", 12.0, "it", Metrics::new(10.453125, 8.625, 8.640625, 0.90625, 9.546875, -0.109375, 8.515625, 8.515625, false)),
    glyph("\\aleph", false, "it", 12.0, "it", Metrics::new(8.94140625, 9.078125, 7.9375, 0.609375, 8.546875, -0.171875, 8.90625, 8.90625, true)),
    glyph("\\hbar", false, "it", 12.0, "it", Metrics::new(8.337890625, 9.125, 6.375, 0.546875, 6.921875, 0.0, 9.125, 9.125, true)),
    glyph("\\ell", false, "it", 12.0, "it", Metrics::new(4.95703125, 9.078125, 4.390625, -0.15625, 4.234375, -0.171875, 8.90625, 8.90625, true)),
    glyph("\\wp", false, "it", 12.0, "it", Metrics::new(8.3671875, 8.59375, 7.25, 0.640625, 7.890625, -2.65625, 5.9375, 5.9375, false)),
    glyph("\\Re", false, "it", 12.0, "it", Metrics::new(9.767578125, 9.078125, 9.15625, 0.484375, 9.640625, -0.171875, 8.90625, 8.90625, true)),
    glyph("\\Im", false, "it", 12.0, "it", Metrics::new(8.3671875, 9.078125, 7.28125, 0.625, 7.90625, -0.171875, 8.90625, 8.90625, true)),
    glyph("\\prime", false, "it", 12.0, "it", Metrics::new(2.724609375, 2.1875, 2.203125, 0.234375, 2.4375, 6.5625, 8.75, 8.75, false)),
    glyph("\\angle", false, "it", 12.0, "it", Metrics::new(10.7578125, 8.75, 8.390625, 1.03125, 9.421875, 0.0, 8.75, 8.75, false)),
    glyph("\\triangle", false, "it", 12.0, "it", Metrics::new(9.228515625, 9.1875, 9.15625, 0.03125, 9.1875, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\surd", false, "it", 12.0, "it", Metrics::new(7.646484375, 9.96875, 7.28125, 0.359375, 7.640625, -0.234375, 9.734375, 9.734375, false)),
    glyph("\\top", false, "it", 12.0, "it", Metrics::new(10.453125, 8.40625, 8.390625, 1.03125, 9.421875, 0.0, 8.40625, 8.40625, false)),
    glyph("\\bot", false, "it", 12.0, "it", Metrics::new(10.453125, 8.40625, 8.390625, 1.03125, 9.421875, 0.0, 8.40625, 8.40625, false)),
    glyph("\\flat", false, "it", 12.0, "it", Metrics::new(5.66015625, 8.796875, 3.640625, 1.0625, 4.703125, -0.03125, 8.765625, 8.765625, false)),
    glyph("\\natural", false, "it", 12.0, "it", Metrics::new(4.2890625, 8.765625, 2.265625, 1.015625, 3.28125, 0.0, 8.765625, 8.765625, false)),
    glyph("\\sharp", false, "it", 12.0, "it", Metrics::new(5.806640625, 8.765625, 3.796875, 1.015625, 4.8125, 0.0, 8.765625, 8.765625, false)),
    glyph("\\clubsuit", false, "it", 12.0, "it", Metrics::new(10.7578125, 8.75, 8.078125, 1.34375, 9.421875, 0.0, 8.75, 8.75, false)),
    glyph("\\diamondsuit", false, "it", 12.0, "it", Metrics::new(10.7578125, 8.75, 6.71875, 2.015625, 8.734375, 0.0, 8.75, 8.75, false)),
    glyph("\\heartsuit", false, "it", 12.0, "it", Metrics::new(10.7578125, 8.71875, 8.59375, 1.078125, 9.671875, 0.0, 8.71875, 8.71875, false)),
    glyph("\\spadesuit", false, "it", 12.0, "it", Metrics::new(10.7578125, 8.75, 6.96875, 1.890625, 8.859375, 0.0, 8.75, 8.75, false)),
    glyph("\\ldots", false, "it", 12.0, "it", Metrics::new(12.0, 1.484375, 9.234375, 1.390625, 10.625, 0.0, 1.484375, 1.484375, false)),
    glyph("\\cdots", false, "it", 12.0, "it", Metrics::new(12.0, 1.5, 9.21875, 1.390625, 10.609375, 2.984375, 4.484375, 4.484375, false)),
    glyph("\\vdots", false, "it", 12.0, "it", Metrics::new(12.0, 9.6875, 1.234375, 5.375, 6.609375, -1.109375, 8.578125, 8.578125, false)),
    glyph("\\ddots", false, "it", 12.0, "it", Metrics::new(12.0, 9.6875, 9.21875, 1.390625, 10.609375, -1.109375, 8.578125, 8.578125, false)),
    glyph("\\langle", false, "it", 12.0, "it", Metrics::new(4.681640625, 10.6875, 2.640625, 1.078125, 3.71875, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\rangle", false, "it", 12.0, "it", Metrics::new(4.681640625, 10.6875, 2.640625, 0.96875, 3.609375, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\lfloor", false, "it", 12.0, "it", Metrics::new(4.681640625, 10.703125, 2.484375, 1.03125, 3.515625, -1.578125, 9.125, 9.125, false)),
    glyph("\\rfloor", false, "it", 12.0, "it", Metrics::new(4.681640625, 10.703125, 2.484375, 1.171875, 3.65625, -1.578125, 9.125, 9.125, false)),
    glyph("\\lceil", false, "it", 12.0, "it", Metrics::new(4.681640625, 10.703125, 2.484375, 1.03125, 3.515625, -1.578125, 9.125, 9.125, false)),
    glyph("\\rceil", false, "it", 12.0, "it", Metrics::new(4.681640625, 10.703125, 2.484375, 1.171875, 3.65625, -1.578125, 9.125, 9.125, false)),
    glyph("\\lbrace", false, "it", 12.0, "it", Metrics::new(7.634765625, 11.078125, 4.640625, 1.5, 6.140625, -1.953125, 9.125, 9.125, false)),
    glyph("\\rbrace", false, "it", 12.0, "it", Metrics::new(7.634765625, 11.078125, 4.640625, 1.5, 6.140625, -1.953125, 9.125, 9.125, false)),
    glyph("\\vert", false, "it", 12.0, "it", Metrics::new(4.04296875, 12.0, 0.984375, 1.53125, 2.515625, -2.828125, 9.171875, 9.171875, false)),
    glyph("\\Vert", false, "it", 12.0, "it", Metrics::new(6.0, 12.0, 2.921875, 1.53125, 4.453125, -2.828125, 9.171875, 9.171875, false)),
    glyph("\\backslash", false, "it", 12.0, "it", Metrics::new(4.04296875, 9.859375, 4.046875, 0.0, 4.046875, -1.109375, 8.75, 8.75, false)),
    glyph("\\S", false, "it", 12.0, "it", Metrics::new(6.0, 10.046875, 4.90625, 0.546875, 5.453125, -1.140625, 8.90625, 8.90625, false)),
    glyph("\\P", false, "it", 12.0, "it", Metrics::new(7.634765625, 9.90625, 5.40625, 0.921875, 6.328125, -1.15625, 8.75, 8.75, false)),
    glyph("\\copyright", false, "it", 12.0, "it", Metrics::new(12.0, 8.703125, 8.6875, 1.65625, 10.34375, 0.0, 8.703125, 8.703125, false)),
    glyph("\\degree", false, "it", 12.0, "it", Metrics::new(6.0, 3.71875, 3.71875, 1.140625, 4.859375, 5.1875, 8.90625, 8.90625, false)),
    glyph("\\imath", false, "it", 12.0, "it", Metrics::new(3.333984375, 6.5625, 2.359375, 0.421875, 2.78125, 0.0, 6.5625, 6.5625, true)),
    glyph("\\jmath", false, "it", 12.0, "it", Metrics::new(3.333984375, 9.0625, 4.171875, -1.359375, 2.8125, -2.5, 6.5625, 6.5625, true)),
    glyph("\\nleftarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\nrightarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\twoheadleftarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\twoheadrightarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\leftarrowtail", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\rightarrowtail", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\mapsfrom", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\mapsup", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.796875, 5.125, 2.46875, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\mapsdown", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.796875, 5.125, 2.46875, 7.59375, -0.046875, 8.75, 8.75, false)),
    glyph("\\looparrowleft", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.578125, 8.765625, 0.59375, 9.359375, 1.203125, 6.78125, 6.78125, false)),
    glyph("\\looparrowright", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.578125, 8.78125, 0.6875, 9.46875, 1.203125, 6.78125, 6.78125, false)),
    glyph("\\leftrightsquigarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.875, 0.59375, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\nleftrightarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.296875, 8.875, 0.59375, 9.46875, 1.109375, 6.40625, 6.40625, false)),
    glyph("\\Lsh", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.921875, 5.515625, 2.03125, 7.546875, 0.0, 8.921875, 8.921875, false)),
    glyph("\\Rsh", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.921875, 5.515625, 2.515625, 8.03125, 0.0, 8.921875, 8.921875, false)),
    glyph("\\curvearrowleft", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.578125, 9.328125, 0.265625, 9.59375, 2.4375, 8.015625, 8.015625, false)),
    glyph("\\curvearrowright", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.578125, 9.328125, 0.46875, 9.796875, 2.4375, 8.015625, 8.015625, false)),
    glyph("\\circlearrowleft", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.40625, 7.90625, 1.234375, 9.140625, 0.75, 8.15625, 8.15625, false)),
    glyph("\\circlearrowright", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.40625, 7.90625, 0.921875, 8.828125, 0.75, 8.15625, 8.15625, false)),
    glyph("\\leftharpoondown", false, "it", 12.0, "it", Metrics::new(10.0546875, 3.0625, 8.78125, 0.59375, 9.375, 1.203125, 4.265625, 4.265625, false)),
    glyph("\\upharpoonright", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.796875, 3.0625, 4.53125, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\upharpoonleft", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.796875, 3.078125, 2.453125, 5.53125, 0.0, 8.796875, 8.796875, false)),
    glyph("\\rightharpoondown", false, "it", 12.0, "it", Metrics::new(10.0546875, 3.0625, 8.78125, 0.6875, 9.46875, 1.203125, 4.265625, 4.265625, false)),
    glyph("\\downharpoonright", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.796875, 3.0625, 4.53125, 7.59375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\downharpoonleft", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.796875, 3.078125, 2.453125, 5.53125, 0.0, 8.796875, 8.796875, false)),
    glyph("\\rightleftarrows", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.65625, 8.875, 0.59375, 9.46875, -0.5625, 8.09375, 8.09375, false)),
    glyph("\\leftrightarrows", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.65625, 8.875, 0.59375, 9.46875, -0.5625, 8.09375, 8.09375, false)),
    glyph("\\leftleftarrows", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.65625, 8.78125, 0.59375, 9.375, -0.5625, 8.09375, 8.09375, false)),
    glyph("\\upuparrows", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.796875, 8.65625, 0.703125, 9.359375, 0.0, 8.796875, 8.796875, false)),
    glyph("\\rightrightarrows", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.65625, 8.78125, 0.6875, 9.46875, -0.5625, 8.09375, 8.09375, false)),
    glyph("\\downdownarrows", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.796875, 8.65625, 0.703125, 9.359375, -0.046875, 8.75, 8.75, false)),
    glyph("\\leftrightharpoons", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.359375, 8.875, 0.59375, 9.46875, 0.078125, 7.4375, 7.4375, false)),
    glyph("\\nLeftarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\nLeftrightarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.265625, 8.875, 0.59375, 9.46875, 1.125, 6.390625, 6.390625, false)),
    glyph("\\nRightarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Lleftarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Rrightarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\leftsquigarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.59375, 9.375, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\rightsquigarrow", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.125, 8.78125, 0.6875, 9.46875, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\longleftrightarrow", false, "it", 12.0, "it", Metrics::new(17.203125, 5.125, 16.03125, 0.59375, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Longleftarrow", false, "it", 12.0, "it", Metrics::new(17.203125, 5.125, 15.921875, 0.59375, 16.515625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Longrightarrow", false, "it", 12.0, "it", Metrics::new(17.203125, 5.125, 15.9375, 0.6875, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\Longleftrightarrow", false, "it", 12.0, "it", Metrics::new(17.203125, 5.125, 16.03125, 0.59375, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\longmapsto", false, "it", 12.0, "it", Metrics::new(17.203125, 5.125, 15.9375, 0.6875, 16.625, 1.203125, 6.328125, 6.328125, false)),
    glyph("\\nmid", false, "it", 12.0, "it", Metrics::new(6.0, 11.8125, 4.8125, 0.59375, 5.40625, -2.5625, 9.25, 9.25, false)),
    glyph("\\nparallel", false, "it", 12.0, "it", Metrics::new(6.0, 11.8125, 4.8125, 0.59375, 5.40625, -2.5625, 9.25, 9.25, false)),
    glyph("\\backsim", false, "it", 12.0, "it", Metrics::new(10.0546875, 2.0625, 7.515625, 1.265625, 8.78125, 2.734375, 4.796875, 4.796875, false)),
    glyph("\\nsim", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.71875, 7.515625, 1.265625, 8.78125, 0.921875, 6.640625, 6.640625, false)),
    glyph("\\eqsim", false, "it", 12.0, "it", Metrics::new(10.0546875, 3.859375, 7.515625, 1.265625, 8.78125, 1.59375, 5.453125, 5.453125, false)),
    glyph("\\ncong", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.953125, 7.515625, 1.265625, 8.78125, -0.0625, 7.890625, 7.890625, false)),
    glyph("\\napprox", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.46875, 7.515625, 1.265625, 8.78125, 0.03125, 7.5, 7.5, false)),
    glyph("\\approxeq", false, "it", 12.0, "it", Metrics::new(10.0546875, 6.09375, 7.515625, 1.265625, 8.78125, 1.078125, 7.171875, 7.171875, false)),
    glyph("\\allequal", false, "it", 12.0, "it", Metrics::new(10.0546875, 6.046875, 7.515625, 1.265625, 8.78125, 1.078125, 7.125, 7.125, false)),
    glyph("\\Bumpeq", false, "it", 12.0, "it", Metrics::new(10.0546875, 6.890625, 7.515625, 1.265625, 8.78125, 0.3125, 7.203125, 7.203125, false)),
    glyph("\\bumpeq", false, "it", 12.0, "it", Metrics::new(10.0546875, 5.140625, 7.515625, 1.265625, 8.78125, 2.0625, 7.203125, 7.203125, false)),
    glyph("\\Doteq", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.484375, 7.515625, 1.265625, 8.78125, 0.015625, 7.5, 7.5, false)),
    glyph("\\fallingdotseq", false, "it", 12.0, "it", Metrics::new(10.06640625, 7.46875, 7.53125, 1.265625, 8.796875, 0.03125, 7.5, 7.5, false)),
    glyph("\\risingdotseq", false, "it", 12.0, "it", Metrics::new(10.06640625, 7.46875, 7.53125, 1.265625, 8.796875, 0.03125, 7.5, 7.5, false)),
    glyph("\\coloneq", false, "it", 12.0, "it", Metrics::new(12.0, 3.90625, 9.578125, 1.21875, 10.796875, 1.8125, 5.71875, 5.71875, false)),
    glyph("\\eqcolon", false, "it", 12.0, "it", Metrics::new(12.0, 3.890625, 9.59375, 1.203125, 10.796875, 1.8125, 5.703125, 5.703125, false)),
    glyph("\\eqcirc", false, "it", 12.0, "it", Metrics::new(10.0546875, 3.390625, 7.515625, 1.265625, 8.78125, 2.0625, 5.453125, 5.453125, false)),
    glyph("\\circeq", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.0625, 7.515625, 1.265625, 8.78125, 2.0625, 9.125, 9.125, false)),
    glyph("\\wedgeq", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.6875, 7.515625, 1.265625, 8.78125, 2.0625, 9.75, 9.75, false)),
    glyph("\\veeeq", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.6875, 7.515625, 1.265625, 8.78125, 2.0625, 9.75, 9.75, false)),
    glyph("\\stareq", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.125, 7.515625, 1.265625, 8.78125, 2.0625, 10.1875, 10.1875, false)),
    glyph("\\triangleq", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.1875, 7.515625, 1.265625, 8.78125, 2.0625, 10.25, 10.25, false)),
    glyph("\\nequiv", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.109375, 7.515625, 1.265625, 8.78125, -0.296875, 7.8125, 7.8125, false)),
    glyph("\\leqq", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.65625, 7.515625, 1.28125, 8.796875, -1.0, 7.65625, 7.65625, false)),
    glyph("\\geqq", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.65625, 7.515625, 1.28125, 8.796875, -1.0, 7.65625, 7.65625, false)),
    glyph("\\lneqq", false, "it", 12.0, "it", Metrics::new(10.0546875, 9.625, 7.515625, 1.28125, 8.796875, -1.96875, 7.65625, 7.65625, false)),
    glyph("\\gneqq", false, "it", 12.0, "it", Metrics::new(10.0546875, 9.625, 7.515625, 1.28125, 8.796875, -1.96875, 7.65625, 7.65625, false)),
    glyph("\\between", false, "it", 12.0, "it", Metrics::new(5.56640625, 10.6875, 3.5, 1.03125, 4.53125, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\nless", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.0625, 7.515625, 1.265625, 8.78125, 0.03125, 8.09375, 8.09375, false)),
    glyph("\\ngtr", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.0625, 7.515625, 1.265625, 8.78125, -0.5625, 7.5, 7.5, false)),
    glyph("\\nleq", false, "it", 12.0, "it", Metrics::new(10.0546875, 9.21875, 7.515625, 1.265625, 8.78125, -1.21875, 8.0, 8.0, false)),
    glyph("\\ngeq", false, "it", 12.0, "it", Metrics::new(10.0546875, 9.21875, 7.515625, 1.265625, 8.78125, -1.21875, 8.0, 8.0, false)),
    glyph("\\lesssim", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.640625, 7.53125, 1.265625, 8.796875, -0.65625, 6.984375, 6.984375, false)),
    glyph("\\gtrsim", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.453125, 7.515625, 1.28125, 8.796875, -0.46875, 6.984375, 6.984375, false)),
    glyph("\\lessgtr", false, "it", 12.0, "it", Metrics::new(10.0546875, 9.28125, 7.578125, 1.21875, 8.796875, -1.046875, 8.234375, 8.234375, false)),
    glyph("\\gtrless", false, "it", 12.0, "it", Metrics::new(10.0546875, 9.28125, 7.578125, 1.21875, 8.796875, -1.046875, 8.234375, 8.234375, false)),
    glyph("\\preccurlyeq", false, "it", 12.0, "it", Metrics::new(10.0546875, 9.28125, 7.515625, 1.265625, 8.78125, -1.265625, 8.015625, 8.015625, false)),
    glyph("\\succcurlyeq", false, "it", 12.0, "it", Metrics::new(10.0546875, 9.28125, 7.515625, 1.265625, 8.78125, -1.265625, 8.015625, 8.015625, false)),
    glyph("\\precsim", false, "it", 12.0, "it", Metrics::new(10.0546875, 9.03125, 7.515625, 1.265625, 8.78125, -1.015625, 8.015625, 8.015625, false)),
    glyph("\\succsim", false, "it", 12.0, "it", Metrics::new(10.0546875, 9.03125, 7.515625, 1.265625, 8.78125, -1.015625, 8.015625, 8.015625, false)),
    glyph("\\nprec", false, "it", 12.0, "it", Metrics::new(10.0546875, 9.90625, 7.515625, 1.265625, 8.78125, -0.734375, 9.171875, 9.171875, false)),
    glyph("\\nsucc", false, "it", 12.0, "it", Metrics::new(10.0546875, 9.90625, 7.515625, 1.265625, 8.78125, -1.65625, 8.25, 8.25, false)),
    glyph("\\nsubset", false, "it", 12.0, "it", Metrics::new(10.0546875, 9.875, 7.65625, 1.203125, 8.859375, -1.15625, 8.71875, 8.71875, false)),
    glyph("\\nsupset", false, "it", 12.0, "it", Metrics::new(10.0546875, 9.875, 7.65625, 1.203125, 8.859375, -1.203125, 8.671875, 8.671875, false)),
    glyph("\\nsubseteq", false, "it", 12.0, "it", Metrics::new(10.0546875, 10.15625, 7.671875, 1.109375, 8.78125, -1.390625, 8.765625, 8.765625, false)),
    glyph("\\nsupseteq", false, "it", 12.0, "it", Metrics::new(10.0546875, 10.15625, 7.671875, 1.265625, 8.9375, -1.390625, 8.765625, 8.765625, false)),
    glyph("\\subsetneq", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.234375, 7.671875, 1.109375, 8.78125, -0.875, 7.359375, 7.359375, false)),
    glyph("\\supsetneq", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.234375, 7.671875, 1.109375, 8.78125, -0.875, 7.359375, 7.359375, false)),
    glyph("\\sqsubset", false, "it", 12.0, "it", Metrics::new(10.0546875, 6.8125, 7.515625, 1.265625, 8.78125, 0.0, 6.8125, 6.8125, false)),
    glyph("\\sqsupset", false, "it", 12.0, "it", Metrics::new(10.0546875, 6.8125, 7.515625, 1.265625, 8.78125, 0.0, 6.8125, 6.8125, false)),
    glyph("\\sqsubseteq", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.5625, 7.515625, 1.265625, 8.78125, -1.0, 7.5625, 7.5625, false)),
    glyph("\\sqsupseteq", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.5625, 7.515625, 1.265625, 8.78125, -1.0, 7.5625, 7.5625, false)),
    glyph("\\vDash", false, "it", 12.0, "it", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\Vdash", false, "it", 12.0, "it", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\Vvdash", false, "it", 12.0, "it", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\VDash", false, "it", 12.0, "it", Metrics::new(10.453125, 8.40625, 8.40625, 1.03125, 9.4375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\nvdash", false, "it", 12.0, "it", Metrics::new(10.453125, 9.34375, 8.40625, 1.03125, 9.4375, -0.46875, 8.875, 8.875, false)),
    glyph("\\nvDash", false, "it", 12.0, "it", Metrics::new(10.453125, 9.34375, 8.40625, 1.03125, 9.4375, -0.46875, 8.875, 8.875, false)),
    glyph("\\nVdash", false, "it", 12.0, "it", Metrics::new(10.453125, 9.34375, 8.40625, 1.03125, 9.4375, -0.46875, 8.875, 8.875, false)),
    glyph("\\nVDash", false, "it", 12.0, "it", Metrics::new(10.453125, 9.34375, 8.40625, 1.03125, 9.4375, -0.46875, 8.875, 8.875, false)),
    glyph("\\vartriangleleft", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.171875, 7.515625, 1.265625, 8.78125, 0.171875, 7.34375, 7.34375, false)),
    glyph("\\vartriangleright", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.171875, 7.515625, 1.265625, 8.78125, 0.171875, 7.34375, 7.34375, false)),
    glyph("\\trianglelefteq", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.671875, 7.515625, 1.265625, 8.78125, -0.578125, 8.09375, 8.09375, false)),
    glyph("\\trianglerighteq", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.671875, 7.515625, 1.265625, 8.78125, -0.578125, 8.09375, 8.09375, false)),
    glyph("\\multimap", false, "it", 12.0, "it", Metrics::new(10.0546875, 3.34375, 8.90625, 0.578125, 9.484375, 2.109375, 5.453125, 5.453125, false)),
    glyph("\\backsimeq", false, "it", 12.0, "it", Metrics::new(10.0546875, 3.875, 7.515625, 1.265625, 8.78125, 2.0625, 5.9375, 5.9375, false)),
    glyph("\\Subset", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.59375, 7.671875, 1.109375, 8.78125, -0.03125, 7.5625, 7.5625, false)),
    glyph("\\Supset", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.59375, 7.671875, 1.265625, 8.9375, -0.03125, 7.5625, 7.5625, false)),
    glyph("\\pitchfork", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.75, 5.59375, 2.234375, 7.828125, 0.0, 8.75, 8.75, false)),
    glyph("\\lessdot", false, "it", 12.0, "it", Metrics::new(10.0546875, 6.421875, 7.515625, 1.265625, 8.78125, 0.546875, 6.96875, 6.96875, false)),
    glyph("\\gtrdot", false, "it", 12.0, "it", Metrics::new(10.0546875, 6.421875, 7.515625, 1.265625, 8.78125, 0.546875, 6.96875, 6.96875, false)),
    glyph("\\lll", false, "it", 12.0, "it", Metrics::new(17.068359375, 7.046875, 15.328125, 0.875, 16.203125, 0.265625, 7.3125, 7.3125, false)),
    glyph("\\ggg", false, "it", 12.0, "it", Metrics::new(17.068359375, 7.046875, 15.328125, 0.875, 16.203125, 0.265625, 7.3125, 7.3125, false)),
    glyph("\\lesseqgtr", false, "it", 12.0, "it", Metrics::new(10.0546875, 12.984375, 7.515625, 1.265625, 8.78125, -2.734375, 10.25, 10.25, false)),
    glyph("\\gtreqless", false, "it", 12.0, "it", Metrics::new(10.0546875, 12.984375, 7.515625, 1.265625, 8.78125, -2.734375, 10.25, 10.25, false)),
    glyph("\\curlyeqprec", false, "it", 12.0, "it", Metrics::new(10.0546875, 9.28125, 7.515625, 1.265625, 8.78125, -1.265625, 8.015625, 8.015625, false)),
    glyph("\\curlyeqsucc", false, "it", 12.0, "it", Metrics::new(10.0546875, 9.28125, 7.515625, 1.265625, 8.78125, -1.265625, 8.015625, 8.015625, false)),
    glyph("\\npreccurlyeq", false, "it", 12.0, "it", Metrics::new(10.0546875, 11.3125, 7.515625, 1.265625, 8.78125, -2.140625, 9.171875, 9.171875, false)),
    glyph("\\nsucccurlyeq", false, "it", 12.0, "it", Metrics::new(10.0546875, 11.3125, 7.515625, 1.265625, 8.78125, -2.140625, 9.171875, 9.171875, false)),
    glyph("\\nsqsubseteq", false, "it", 12.0, "it", Metrics::new(10.0546875, 10.890625, 7.515625, 1.265625, 8.78125, -1.6875, 9.203125, 9.203125, false)),
    glyph("\\nsqsupseteq", false, "it", 12.0, "it", Metrics::new(10.0546875, 10.890625, 7.515625, 1.265625, 8.78125, -1.6875, 9.203125, 9.203125, false)),
    glyph("\\lnsim", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.640625, 7.53125, 1.265625, 8.796875, -1.65625, 6.984375, 6.984375, false)),
    glyph("\\gnsim", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.640625, 7.53125, 1.265625, 8.796875, -1.65625, 6.984375, 6.984375, false)),
    glyph("\\precnsim", false, "it", 12.0, "it", Metrics::new(10.0546875, 10.046875, 7.515625, 1.265625, 8.78125, -2.03125, 8.015625, 8.015625, false)),
    glyph("\\succnsim", false, "it", 12.0, "it", Metrics::new(10.0546875, 10.0625, 7.515625, 1.3125, 8.828125, -2.046875, 8.015625, 8.015625, false)),
    glyph("\\ntriangleleft", false, "it", 12.0, "it", Metrics::new(10.0546875, 10.640625, 7.515625, 1.265625, 8.78125, -1.5625, 9.078125, 9.078125, false)),
    glyph("\\ntriangleright", false, "it", 12.0, "it", Metrics::new(10.0546875, 10.640625, 7.515625, 1.265625, 8.78125, -1.5625, 9.078125, 9.078125, false)),
    glyph("\\ntrianglelefteq", false, "it", 12.0, "it", Metrics::new(10.0546875, 12.046875, 7.515625, 1.265625, 8.78125, -2.265625, 9.78125, 9.78125, false)),
    glyph("\\ntrianglerighteq", false, "it", 12.0, "it", Metrics::new(10.0546875, 12.046875, 7.515625, 1.25, 8.765625, -2.265625, 9.78125, 9.78125, false)),
    glyph("\\leqslant", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -1.46875, 6.96875, 6.96875, false)),
    glyph("\\geqslant", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -1.46875, 6.96875, 6.96875, false)),
    glyph("\\lessapprox", false, "it", 12.0, "it", Metrics::new(10.0546875, 9.546875, 7.53125, 1.265625, 8.796875, -1.59375, 7.953125, 7.953125, false)),
    glyph("\\gtrapprox", false, "it", 12.0, "it", Metrics::new(10.0546875, 9.546875, 7.53125, 1.265625, 8.796875, -1.59375, 7.953125, 7.953125, false)),
    glyph("\\lneq", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -1.453125, 6.984375, 6.984375, false)),
    glyph("\\gneq", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -1.453125, 6.984375, 6.984375, false)),
    glyph("\\lnapprox", false, "it", 12.0, "it", Metrics::new(10.0546875, 10.390625, 7.53125, 1.265625, 8.796875, -2.4375, 7.953125, 7.953125, false)),
    glyph("\\gnapprox", false, "it", 12.0, "it", Metrics::new(10.0546875, 10.390625, 7.53125, 1.265625, 8.796875, -2.4375, 7.953125, 7.953125, false)),
    glyph("\\lesseqqgtr", false, "it", 12.0, "it", Metrics::new(10.0546875, 13.21875, 7.515625, 1.265625, 8.78125, -3.71875, 9.5, 9.5, false)),
    glyph("\\gtreqqless", false, "it", 12.0, "it", Metrics::new(10.0546875, 13.21875, 7.515625, 1.265625, 8.78125, -3.71875, 9.5, 9.5, false)),
    glyph("\\eqslantless", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -0.71875, 7.71875, 7.71875, false)),
    glyph("\\eqslantgtr", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.4375, 7.515625, 1.265625, 8.78125, -0.71875, 7.71875, 7.71875, false)),
    glyph("\\preceq", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.296875, 7.515625, 1.265625, 8.78125, -0.28125, 8.015625, 8.015625, false)),
    glyph("\\succeq", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.296875, 7.515625, 1.265625, 8.78125, -0.28125, 8.015625, 8.015625, false)),
    glyph("\\precneqq", false, "it", 12.0, "it", Metrics::new(10.0546875, 10.28125, 7.515625, 1.265625, 8.78125, -2.34375, 7.9375, 7.9375, false)),
    glyph("\\succneqq", false, "it", 12.0, "it", Metrics::new(10.0546875, 10.28125, 7.515625, 1.265625, 8.78125, -2.34375, 7.9375, 7.9375, false)),
    glyph("\\precapprox", false, "it", 12.0, "it", Metrics::new(10.0546875, 10.609375, 7.515625, 1.265625, 8.78125, -2.296875, 8.3125, 8.3125, false)),
    glyph("\\succapprox", false, "it", 12.0, "it", Metrics::new(10.0546875, 10.609375, 7.515625, 1.265625, 8.78125, -2.296875, 8.3125, 8.3125, false)),
    glyph("\\precnapprox", false, "it", 12.0, "it", Metrics::new(10.0546875, 11.421875, 7.53125, 1.265625, 8.796875, -3.109375, 8.3125, 8.3125, false)),
    glyph("\\succnapprox", false, "it", 12.0, "it", Metrics::new(10.0546875, 11.421875, 7.53125, 1.265625, 8.796875, -3.109375, 8.3125, 8.3125, false)),
    glyph("\\dotplus", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.75, 7.515625, 1.265625, 8.78125, 0.0, 8.75, 8.75, false)),
    glyph("\\smallsetminus", false, "it", 12.0, "it", Metrics::new(7.640625, 9.859375, 4.046875, 2.3125, 6.359375, -0.640625, 9.21875, 9.21875, false)),
    glyph("\\dotminus", false, "it", 12.0, "it", Metrics::new(10.0546875, 3.359375, 7.515625, 1.265625, 8.78125, 3.265625, 6.625, 6.625, false)),
    glyph("\\cupdot", false, "it", 12.0, "it", Metrics::new(8.783203125, 6.953125, 5.6875, 1.546875, 7.234375, 0.0, 6.953125, 6.953125, false)),
    glyph("\\circledcirc", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\circledast", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\circleddash", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\boxplus", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\boxminus", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\boxtimes", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\boxdot", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.890625, 7.859375, 1.09375, 8.953125, -0.171875, 7.71875, 7.71875, false)),
    glyph("\\intercal", false, "it", 12.0, "it", Metrics::new(6.24609375, 8.40625, 3.46875, 1.390625, 4.859375, 0.0, 8.40625, 8.40625, false)),
    glyph("\\veebar", false, "it", 12.0, "it", Metrics::new(8.783203125, 8.890625, 6.4375, 1.171875, 7.609375, 0.0, 8.890625, 8.890625, false)),
    glyph("\\barwedge", false, "it", 12.0, "it", Metrics::new(8.783203125, 8.890625, 6.4375, 1.171875, 7.609375, 0.0, 8.890625, 8.890625, false)),
    glyph("\\barvee", false, "it", 12.0, "it", Metrics::new(8.783203125, 8.890625, 6.4375, 1.171875, 7.609375, 0.0, 8.890625, 8.890625, false)),
    glyph("\\divideontimes", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.1875, 7.515625, 1.265625, 8.78125, 0.171875, 7.359375, 7.359375, false)),
    glyph("\\ltimes", false, "it", 12.0, "it", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\rtimes", false, "it", 12.0, "it", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\leftthreetimes", false, "it", 12.0, "it", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\rightthreetimes", false, "it", 12.0, "it", Metrics::new(12.0, 8.25, 9.46875, 1.265625, 10.734375, -0.359375, 7.890625, 7.890625, false)),
    glyph("\\curlyvee", false, "it", 12.0, "it", Metrics::new(8.7890625, 6.953125, 7.625, 0.578125, 8.203125, 0.0, 6.953125, 6.953125, false)),
    glyph("\\curlywedge", false, "it", 12.0, "it", Metrics::new(8.7890625, 6.953125, 7.625, 0.578125, 8.203125, 0.0, 6.953125, 6.953125, false)),
    glyph("\\Cap", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.953125, 7.59375, 1.234375, 8.828125, 0.0, 7.953125, 7.953125, false)),
    glyph("\\Cup", false, "it", 12.0, "it", Metrics::new(10.0546875, 7.953125, 7.59375, 1.234375, 8.828125, -0.171875, 7.78125, 7.78125, false)),
    glyph("\\doublebarwedge", false, "it", 12.0, "it", Metrics::new(10.0546875, 6.15625, 5.140625, 2.453125, 7.59375, 0.0, 6.15625, 6.15625, false)),
    glyph("\\bigodot", false, "it", 12.0, "it", Metrics::new(12.0, 11.34375, 11.3125, 0.34375, 11.65625, -2.375, 8.96875, 8.96875, false)),
    glyph("\\oiint", false, "it", 12.0, "it", Metrics::new(9.46875, 11.625, 8.09375, 0.6875, 8.78125, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\oiiint", false, "it", 12.0, "it", Metrics::new(12.685546875, 11.625, 11.3125, 0.6875, 12.0, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\iiiint", false, "it", 12.0, "it", Metrics::new(15.90234375, 11.625, 14.53125, 0.6875, 15.21875, -2.546875, 9.078125, 9.078125, false)),
    glyph("\\minus", false, "it", 12.0, "it", Metrics::new(10.0546875, 1.0, 7.515625, 1.265625, 8.78125, 3.265625, 4.265625, 4.265625, false)),
    glyph("\\cdotp", false, "it", 12.0, "it", Metrics::new(3.814453125, 1.484375, 1.234375, 1.28125, 2.515625, 3.421875, 4.90625, 4.90625, false)),
    glyph("\\hslash", false, "it", 12.0, "it", Metrics::new(7.60546875, 9.125, 6.53125, 0.53125, 7.0625, 0.0, 9.125, 9.125, true)),
    glyph("\\beth", false, "it", 12.0, "it", Metrics::new(8.0859375, 9.078125, 7.859375, -0.03125, 7.828125, -0.171875, 8.90625, 8.90625, true)),
    glyph("\\gimel", false, "it", 12.0, "it", Metrics::new(5.58984375, 9.328125, 4.71875, 0.15625, 4.875, -0.421875, 8.90625, 8.90625, true)),
    glyph("\\daleth", false, "it", 12.0, "it", Metrics::new(7.734375, 9.328125, 6.59375, 0.5, 7.09375, -0.421875, 8.90625, 8.90625, true)),
    glyph("\\mho", false, "it", 12.0, "it", Metrics::new(9.169921875, 8.859375, 8.265625, 0.453125, 8.71875, -0.171875, 8.6875, 8.6875, false)),
    glyph("\\eth", false, "it", 12.0, "it", Metrics::new(7.341796875, 9.296875, 6.5, 0.546875, 7.046875, -0.171875, 9.125, 9.125, true)),
    glyph("\\Finv", false, "it", 12.0, "it", Metrics::new(6.90234375, 8.75, 6.71875, 0.328125, 7.046875, 0.0, 8.75, 8.75, true)),
    glyph("\\Game", false, "it", 12.0, "it", Metrics::new(9.298828125, 9.078125, 7.640625, 0.953125, 8.59375, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\digamma", false, "it", 12.0, "it", Metrics::new(5.501953125, 11.625, 8.203125, -2.203125, 6.0, -2.5, 9.125, 9.125, true)),
    glyph("\\varkappa", false, "it", 12.0, "it", Metrics::new(7.962890625, 7.328125, 7.953125, -0.046875, 7.90625, -0.40625, 6.921875, 6.921875, true)),
    glyph("\\backepsilon", false, "it", 12.0, "it", Metrics::new(7.3828125, 6.890625, 5.09375, 1.15625, 6.25, -0.171875, 6.71875, 6.71875, false)),
    glyph("\\AA", false, "it", 12.0, "it", Metrics::new(8.208984375, 11.140625, 8.03125, -0.640625, 7.390625, 0.0, 11.140625, 11.140625, true)),
    glyph("\\ae", false, "it", 12.0, "it", Metrics::new(11.94140625, 6.890625, 10.921875, 0.5, 11.421875, -0.171875, 6.71875, 6.71875, true)),
    glyph("\\AE", false, "it", 12.0, "it", Metrics::new(11.689453125, 8.75, 12.46875, -0.53125, 11.9375, 0.0, 8.75, 8.75, true)),
    glyph("\\oe", false, "it", 12.0, "it", Metrics::new(12.333984375, 6.890625, 11.265625, 0.546875, 11.8125, -0.171875, 6.71875, 6.71875, true)),
    glyph("\\OE", false, "it", 12.0, "it", Metrics::new(12.837890625, 8.75, 12.25, 0.546875, 12.796875, 0.0, 8.75, 8.75, true)),
    glyph("\\o", false, "it", 12.0, "it", Metrics::new(7.341796875, 7.625, 7.640625, -0.171875, 7.46875, -0.546875, 7.078125, 7.078125, true)),
    glyph("\\O", false, "it", 12.0, "it", Metrics::new(9.4453125, 9.53125, 10.109375, -0.40625, 9.703125, -0.390625, 9.140625, 9.140625, true)),
    glyph("\\ss", false, "it", 12.0, "it", Metrics::new(7.55859375, 9.296875, 6.515625, 0.5625, 7.078125, -0.171875, 9.125, 9.125, true)),
    glyph("\\l", false, "it", 12.0, "it", Metrics::new(3.4453125, 9.125, 3.609375, 0.203125, 3.8125, 0.0, 9.125, 9.125, true)),
    glyph("\\L", false, "it", 12.0, "it", Metrics::new(6.744140625, 8.75, 6.265625, -0.234375, 6.03125, 0.0, 8.75, 8.75, true)),
    glyph("\\complement", false, "it", 12.0, "it", Metrics::new(7.634765625, 9.078125, 5.84375, 0.796875, 6.640625, -0.171875, 8.90625, 8.90625, false)),
    glyph("\\nexists", false, "it", 12.0, "it", Metrics::new(7.58203125, 9.859375, 5.640625, 1.171875, 6.8125, -0.546875, 9.3125, 9.3125, false)),
    glyph("\\varnothing", false, "it", 12.0, "it", Metrics::new(10.453125, 8.625, 8.640625, 0.90625, 9.546875, -0.109375, 8.515625, 8.515625, false)),
    glyph("\\smallin", false, "it", 12.0, "it", Metrics::new(8.61328125, 5.703125, 6.078125, 1.265625, 7.34375, 0.90625, 6.609375, 6.609375, false)),
    glyph("\\QED", false, "it", 12.0, "it", Metrics::new(7.634765625, 5.828125, 4.109375, 1.765625, 5.875, 0.0, 5.828125, 5.828125, false)),
    glyph("\\measuredangle", false, "it", 12.0, "it", Metrics::new(10.7578125, 9.375, 8.390625, 1.03125, 9.421875, -0.625, 8.75, 8.75, false)),
    glyph("\\sphericalangle", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.75, 7.40625, 1.390625, 8.796875, -0.03125, 8.71875, 8.71875, false)),
    glyph("\\rightangle", false, "it", 12.0, "it", Metrics::new(10.0546875, 6.734375, 6.734375, 1.65625, 8.390625, 1.1875, 7.921875, 7.921875, false)),
    glyph("\\therefore", false, "it", 12.0, "it", Metrics::new(7.634765625, 6.046875, 6.21875, 0.703125, 6.921875, 1.203125, 7.25, 7.25, false)),
    glyph("\\because", false, "it", 12.0, "it", Metrics::new(7.634765625, 6.046875, 6.21875, 0.703125, 6.921875, 1.203125, 7.25, 7.25, false)),
    glyph("\\Colon", false, "it", 12.0, "it", Metrics::new(7.634765625, 6.046875, 6.21875, 0.703125, 6.921875, 1.203125, 7.25, 7.25, false)),
    glyph("\\lnot", false, "it", 12.0, "it", Metrics::new(10.0546875, 3.359375, 7.515625, 1.265625, 8.78125, 1.6875, 5.046875, 5.046875, false)),
    glyph("\\sqrt", false, "it", 12.0, "it", Metrics::new(7.646484375, 9.96875, 7.28125, 0.359375, 7.640625, -0.234375, 9.734375, 9.734375, false)),
    glyph("\\dots", false, "it", 12.0, "it", Metrics::new(12.0, 1.484375, 9.234375, 1.390625, 10.625, 0.0, 1.484375, 1.484375, false)),
    glyph("\\adots", false, "it", 12.0, "it", Metrics::new(12.0, 9.6875, 9.21875, 1.390625, 10.609375, -1.109375, 8.578125, 8.578125, false)),
    glyph("\\ulcorner", false, "it", 12.0, "it", Metrics::new(5.625, 4.015625, 3.8125, 1.03125, 4.84375, 5.109375, 9.125, 9.125, false)),
    glyph("\\urcorner", false, "it", 12.0, "it", Metrics::new(5.625, 4.015625, 3.8125, 0.78125, 4.59375, 5.109375, 9.125, 9.125, false)),
    glyph("\\llcorner", false, "it", 12.0, "it", Metrics::new(5.625, 4.015625, 3.8125, 1.03125, 4.84375, -0.84375, 3.171875, 3.171875, false)),
    glyph("\\lrcorner", false, "it", 12.0, "it", Metrics::new(5.625, 4.015625, 3.8125, 0.78125, 4.59375, -0.84375, 3.171875, 3.171875, false)),
    glyph("\\lbrack", false, "it", 12.0, "it", Metrics::new(4.681640625, 10.703125, 2.484375, 1.03125, 3.515625, -1.578125, 9.125, 9.125, false)),
    glyph("\\rbrack", false, "it", 12.0, "it", Metrics::new(4.681640625, 10.703125, 2.484375, 1.171875, 3.65625, -1.578125, 9.125, 9.125, false)),
    glyph("\\leftparen", false, "it", 12.0, "it", Metrics::new(4.681640625, 10.6875, 2.6875, 1.03125, 3.71875, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\rightparen", false, "it", 12.0, "it", Metrics::new(4.681640625, 10.6875, 2.6875, 0.96875, 3.65625, -1.578125, 9.109375, 9.109375, false)),
    glyph("\\bigtriangleup", false, "it", 12.0, "it", Metrics::new(9.228515625, 9.1875, 9.15625, 0.03125, 9.1875, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\vartriangle", false, "it", 12.0, "it", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\blacktriangle", false, "it", 12.0, "it", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\triangleright", false, "it", 12.0, "it", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\blacktriangleright", false, "it", 12.0, "it", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\bigtriangledown", false, "it", 12.0, "it", Metrics::new(9.228515625, 9.1875, 9.15625, 0.03125, 9.1875, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\triangledown", false, "it", 12.0, "it", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\blacktriangledown", false, "it", 12.0, "it", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\triangleleft", false, "it", 12.0, "it", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\blacktriangleleft", false, "it", 12.0, "it", Metrics::new(6.0234375, 5.984375, 5.953125, 0.03125, 5.984375, 0.125, 6.109375, 6.109375, false)),
    glyph("\\lozenge", false, "it", 12.0, "it", Metrics::new(5.9296875, 12.484375, 5.859375, 0.03125, 5.890625, -2.796875, 9.6875, 9.6875, false)),
    glyph("\\blacksquare", false, "it", 12.0, "it", Metrics::new(11.337890625, 9.1875, 9.15625, 1.09375, 10.25, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\square", false, "it", 12.0, "it", Metrics::new(11.337890625, 9.1875, 9.15625, 1.09375, 10.25, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\Box", false, "it", 12.0, "it", Metrics::new(11.337890625, 9.1875, 9.15625, 1.09375, 10.25, -1.46875, 7.71875, 7.71875, false)),
    glyph("\\bigstar", false, "it", 12.0, "it", Metrics::new(10.7578125, 8.71875, 9.203125, 0.78125, 9.984375, -0.046875, 8.671875, 8.671875, false)),
    glyph("\\diagup", false, "it", 12.0, "it", Metrics::new(7.224609375, 14.015625, 8.265625, -0.515625, 7.75, -2.875, 11.140625, 11.140625, false)),
    glyph("\\diagdown", false, "it", 12.0, "it", Metrics::new(7.224609375, 14.015625, 8.265625, -0.515625, 7.75, -2.875, 11.140625, 11.140625, false)),
    glyph("\\varspadesuit", false, "it", 12.0, "it", Metrics::new(10.7578125, 8.75, 6.984375, 1.890625, 8.875, 0.0, 8.75, 8.75, false)),
    glyph("\\varheartsuit", false, "it", 12.0, "it", Metrics::new(10.7578125, 8.75, 8.640625, 1.0625, 9.703125, 0.0, 8.75, 8.75, false)),
    glyph("\\vardiamondsuit", false, "it", 12.0, "it", Metrics::new(10.7578125, 8.75, 6.71875, 2.015625, 8.734375, 0.0, 8.75, 8.75, false)),
    glyph("\\varclubsuit", false, "it", 12.0, "it", Metrics::new(10.7578125, 8.796875, 8.078125, 1.34375, 9.421875, 0.0, 8.796875, 8.796875, false)),
    glyph("\\checkmark", false, "it", 12.0, "it", Metrics::new(10.0546875, 6.40625, 6.21875, 1.796875, 8.015625, 1.15625, 7.5625, 7.5625, false)),
    glyph("\\maltese", false, "it", 12.0, "it", Metrics::new(10.0546875, 8.75, 8.75, 0.65625, 9.40625, 0.0, 8.75, 8.75, false)),
    glyph("\\sun", false, "it", 12.0, "it", Metrics::new(10.7578125, 8.765625, 8.765625, 1.0, 9.765625, 0.0, 8.765625, 8.765625, false)),
    glyph("\\mercury", false, "it", 12.0, "it", Metrics::new(7.365234375, 10.0, 5.3125, 1.03125, 6.34375, -1.21875, 8.78125, 8.78125, false)),
    glyph("\\venus", false, "it", 12.0, "it", Metrics::new(8.7890625, 10.28125, 6.734375, 1.03125, 7.765625, -1.5, 8.78125, 8.78125, false)),
    glyph("\\earth", false, "it", 12.0, "it", Metrics::new(8.7890625, 10.28125, 6.734375, 1.03125, 7.765625, -0.171875, 10.109375, 10.109375, false)),
    glyph("\\mars", false, "it", 12.0, "it", Metrics::new(10.7578125, 8.8125, 9.015625, 0.953125, 9.96875, -0.171875, 8.640625, 8.640625, false)),
    glyph("\\jupiter", false, "it", 12.0, "it", Metrics::new(10.7578125, 8.765625, 6.78125, 1.984375, 8.765625, 0.0, 8.765625, 8.765625, false)),
    glyph("\\saturn", false, "it", 12.0, "it", Metrics::new(10.7578125, 8.765625, 5.5, 2.625, 8.125, 0.0, 8.765625, 8.765625, false)),
    glyph("\\uranus", false, "it", 12.0, "it", Metrics::new(10.7578125, 8.765625, 7.84375, 1.453125, 9.296875, 0.0, 8.765625, 8.765625, false)),
    glyph("\\neptune", false, "it", 12.0, "it", Metrics::new(10.7578125, 8.765625, 7.703125, 1.53125, 9.234375, 0.0, 8.765625, 8.765625, false)),
    glyph("\\pluto", false, "it", 12.0, "it", Metrics::new(10.7578125, 8.765625, 4.984375, 2.890625, 7.875, 0.0, 8.765625, 8.765625, false)),
    glyph("\\male", false, "it", 12.0, "it", Metrics::new(10.7578125, 8.8125, 9.015625, 0.953125, 9.96875, -0.171875, 8.640625, 8.640625, false)),
    glyph("\\female", false, "it", 12.0, "it", Metrics::new(8.7890625, 10.28125, 6.734375, 1.03125, 7.765625, -1.5, 8.78125, 8.78125, false)),
    glyph("\\circledR", false, "it", 12.0, "it", Metrics::new(12.0, 8.703125, 8.6875, 1.65625, 10.34375, 0.0, 8.703125, 8.703125, false)),
    glyph("\\yen", false, "it", 12.0, "it", Metrics::new(7.634765625, 8.75, 6.65625, 0.484375, 7.140625, 0.0, 8.75, 8.75, false)),
    glyph("\\sterling", false, "it", 12.0, "it", Metrics::new(7.634765625, 8.90625, 5.828125, 0.75, 6.578125, 0.0, 8.90625, 8.90625, false)),
    glyph("\\cent", false, "it", 12.0, "it", Metrics::new(7.634765625, 10.21875, 5.1875, 1.015625, 6.203125, -1.828125, 8.390625, 8.390625, false)),
    glyph("\\backprime", false, "it", 12.0, "it", Metrics::new(2.724609375, 2.1875, 2.203125, 0.234375, 2.4375, 6.5625, 8.75, 8.75, false)),
    glyph("\\dag", false, "it", 12.0, "it", Metrics::new(6.0, 9.90625, 5.34375, 0.328125, 5.671875, -1.15625, 8.75, 8.75, false)),
    glyph("\\ddag", false, "it", 12.0, "it", Metrics::new(6.0, 9.90625, 5.34375, 0.328125, 5.671875, -1.15625, 8.75, 8.75, false)),
    glyph("é", false, "it", 12.0, "it", Metrics::new(7.3828125, 9.765625, 6.375, 0.546875, 6.921875, -0.171875, 9.59375, 9.59375, true)),
    glyph(" ", false, "it", 12.0, "it", Metrics::new(3.814453125, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, false)),
];
