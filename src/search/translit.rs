//! Cyrillic to Latin romanization.

/// Romanization standard applied to translated names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scheme {
    /// ICAO Doc 9303, as used in machine-readable travel documents.
    #[default]
    IcaoDoc9303,
    /// GOST R 52535.1-2006, the earlier Russian passport scheme.
    Gost52535,
}

impl Scheme {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "icao_doc_9303" | "icao" => Some(Scheme::IcaoDoc9303),
            "gost_52535" | "gost" => Some(Scheme::Gost52535),
            _ => None,
        }
    }

    /// Romanizes every Cyrillic letter in `text`; other characters pass through.
    /// Upper-case letters produce a capitalized romanization (`Щ` -> `Shch`).
    pub fn transliterate(self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            let lower = c.to_lowercase().next().unwrap_or(c);
            match self.romanize(lower) {
                Some(latin) if c.is_uppercase() => {
                    let mut letters = latin.chars();
                    if let Some(first) = letters.next() {
                        out.extend(first.to_uppercase());
                        out.push_str(letters.as_str());
                    }
                }
                Some(latin) => out.push_str(latin),
                None => out.push(c),
            }
        }
        out
    }

    fn romanize(self, c: char) -> Option<&'static str> {
        match (self, c) {
            (Scheme::Gost52535, 'ц') => Some("tc"),
            (Scheme::Gost52535, 'ъ') => Some(""),
            _ => common(c),
        }
    }
}

fn common(c: char) -> Option<&'static str> {
    let latin = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'ґ' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "e",
        'є' => "ie",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'і' => "i",
        'ї' => "i",
        'й' => "i",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ў' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ъ' => "ie",
        'ы' => "y",
        'ь' => "",
        'э' => "e",
        'ю' => "iu",
        'я' => "ia",
        _ => return None,
    };
    Some(latin)
}
