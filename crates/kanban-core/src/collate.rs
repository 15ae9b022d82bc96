//! Locale-style string ordering for ticket titles.
//!
//! Both titles are decomposed to NFD, so every accented letter becomes a base
//! character followed by its combining marks. Titles are then compared in
//! tiers:
//!
//! 1. primary: character class (whitespace < punctuation/symbols < digits <
//!    letters), then the lowercase base character;
//! 2. secondary: the diacritics attached to each base (`e` < `é` < `ë`);
//! 3. tertiary: lowercase sorts before uppercase;
//! 4. code point order of the decomposed form.
//!
//! Canonically equivalent strings (`é` and `e` + U+0301) compare equal.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Symbol,
    Digit,
    Letter,
}

fn class_of(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Whitespace
    } else if c.is_numeric() {
        CharClass::Digit
    } else if c.is_alphabetic() {
        CharClass::Letter
    } else {
        CharClass::Symbol
    }
}

/// A base character and the combining marks that follow it.
#[derive(Debug)]
struct Element {
    base: char,
    marks: Vec<char>,
}

impl Element {
    fn primary(&self) -> impl Iterator<Item = (CharClass, char)> + '_ {
        let class = class_of(self.base);
        self.base.to_lowercase().map(move |lower| (class, lower))
    }
}

fn elements(s: &str) -> Vec<Element> {
    let mut out: Vec<Element> = Vec::with_capacity(s.len());
    for c in s.nfd() {
        match out.last_mut() {
            Some(last) if is_combining_mark(c) => last.marks.push(c),
            _ => out.push(Element {
                base: c,
                marks: Vec::new(),
            }),
        }
    }
    out
}

/// Compare two strings with locale-style collation.
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let ea = elements(a);
    let eb = elements(b);

    ea.iter()
        .flat_map(Element::primary)
        .cmp(eb.iter().flat_map(Element::primary))
        .then_with(|| ea.iter().map(|e| &e.marks).cmp(eb.iter().map(|e| &e.marks)))
        .then_with(|| {
            ea.iter()
                .map(|e| e.base.is_uppercase())
                .cmp(eb.iter().map(|e| e.base.is_uppercase()))
        })
        .then_with(|| a.nfd().cmp(b.nfd()))
}
