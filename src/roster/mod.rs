//! The synthetic programmer roster
//!
//! Record type, the closed set of language labels, and the generator that
//! fills a roster from configured bounds.

mod generator;

pub use generator::RosterGenerator;

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// One synthetic programmer record. Immutable once generated; scans only
/// ever read it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Programmer {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub language: Language,
    /// When they started programming; at least the minimum coding age
    /// after `birth_date`
    pub start_date: NaiveDate,
    pub salary: f64,
}

impl Programmer {
    /// "LASTNAME FIRSTNAME", the form result lines print.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }
}

impl fmt::Display for Programmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} | born {} | {} since {} | {:.2}",
            self.last_name,
            self.first_name,
            self.birth_date,
            self.language,
            self.start_date,
            self.salary
        )
    }
}

/// The closed set of primary-language labels a record can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    Java,
    Python,
    Php,
    CSharp,
    JavaScript,
    Cpp,
    C,
    ObjectiveC,
    R,
    Swift,
    Matlab,
    Ruby,
    VisualBasic,
    Vba,
    Scala,
    Perl,
    Lua,
    Go,
    Delphi,
    Haskell,
    Rust,
}

impl Language {
    /// Every label, in the fixed order the generator draws from.
    pub const ALL: [Language; 21] = [
        Language::Java,
        Language::Python,
        Language::Php,
        Language::CSharp,
        Language::JavaScript,
        Language::Cpp,
        Language::C,
        Language::ObjectiveC,
        Language::R,
        Language::Swift,
        Language::Matlab,
        Language::Ruby,
        Language::VisualBasic,
        Language::Vba,
        Language::Scala,
        Language::Perl,
        Language::Lua,
        Language::Go,
        Language::Delphi,
        Language::Haskell,
        Language::Rust,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Language::Java => "Java",
            Language::Python => "Python",
            Language::Php => "PHP",
            Language::CSharp => "C#",
            Language::JavaScript => "JavaScript",
            Language::Cpp => "C++",
            Language::C => "C",
            Language::ObjectiveC => "Objective-C",
            Language::R => "R",
            Language::Swift => "Swift",
            Language::Matlab => "MATLAB",
            Language::Ruby => "Ruby",
            Language::VisualBasic => "Visual Basic",
            Language::Vba => "VBA",
            Language::Scala => "Scala",
            Language::Perl => "Perl",
            Language::Lua => "Lua",
            Language::Go => "Go",
            Language::Delphi => "Delphi",
            Language::Haskell => "Haskell",
            Language::Rust => "Rust",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
