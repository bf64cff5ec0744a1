//! Romanian syllable-boundary segmentation for hyphenation.
//!
//! A single left-to-right scan over the lower-cased word: triphthongs
//! and diphthongs close a syllable as a unit, a lone vowel before a
//! consonant-vowel sequence closes one (V-CV), and between two
//! consonants the first one closes the syllable unless the pair is an
//! unsplittable cluster (V-CCV vs VC-CV). Entirely independent of the
//! decomposition engine.

use phf::phf_set;

static DIPHTHONGS: phf::Set<&'static str> = phf_set! {
    "ea", "eo", "eu", "ia", "ie", "ii", "io", "iu",
    "îi", "oa", "ua", "uă", "ue", "ui", "uo",
};

static TRIPHTHONGS: phf::Set<&'static str> = phf_set! {
    "eai", "eau", "iai", "iau", "iei", "ioa", "oai",
};

static CONSONANT_CLUSTERS: phf::Set<&'static str> = phf_set! {
    "bl", "br", "cl", "cr", "dr", "fl", "fr", "gl", "gr",
    "pl", "pr", "sc", "sk", "sl", "sm", "sn", "sp", "st",
    "șt", "tr", "vr", "zl", "zn", "zv",
};

const VOWELS: &[char] = &['a', 'ă', 'â', 'e', 'i', 'î', 'o', 'u'];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

fn window(chars: &[char], start: usize, len: usize) -> String {
    chars[start..start + len].iter().collect()
}

/// Split a word into syllables.
pub fn syllable_breaks(word: &str) -> Vec<String> {
    let word = word.to_lowercase();
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    let mut syllables = Vec::new();
    let mut current = String::new();
    let mut i = 0usize;

    while i < n {
        current.push(chars[i]);

        // A triphthong starting here closes the syllable as a unit.
        if i + 2 < n && TRIPHTHONGS.contains(window(&chars, i, 3).as_str()) {
            current.push(chars[i + 1]);
            current.push(chars[i + 2]);
            i += 2;
            syllables.push(std::mem::take(&mut current));
            i += 1;
            continue;
        }

        // Likewise a diphthong.
        if i + 1 < n && DIPHTHONGS.contains(window(&chars, i, 2).as_str()) {
            current.push(chars[i + 1]);
            i += 1;
            syllables.push(std::mem::take(&mut current));
            i += 1;
            continue;
        }

        if i + 1 < n {
            // V-C-V: the vowel closes the syllable, the consonant opens
            // the next one.
            if is_vowel(chars[i])
                && !is_vowel(chars[i + 1])
                && i + 2 < n
                && is_vowel(chars[i + 2])
            {
                syllables.push(std::mem::take(&mut current));
            }
            // V-C-C-V: unsplittable clusters stay together; otherwise
            // the first consonant closes the syllable.
            else if is_vowel(chars[i])
                && !is_vowel(chars[i + 1])
                && i + 2 < n
                && !is_vowel(chars[i + 2])
            {
                if CONSONANT_CLUSTERS.contains(window(&chars, i + 1, 2).as_str()) {
                    syllables.push(std::mem::take(&mut current));
                } else {
                    current.push(chars[i + 1]);
                    syllables.push(std::mem::take(&mut current));
                    i += 1;
                }
            }
        }

        i += 1;
    }

    if !current.is_empty() {
        syllables.push(current);
    }

    syllables
}

/// The word with syllables separated by hyphens.
pub fn hyphenate(word: &str) -> String {
    syllable_breaks(word).join("-")
}
