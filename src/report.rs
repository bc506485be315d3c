//! Human-readable report of an analysed function.
//!
//! The report is plain UTF-8 text; only the headings and the yes/no answers
//! depend on the chosen [`Language`].

use std::io::Write;

use log::info;

use crate::analysis::{
    build_dnf, build_knf, classify, find_dual_function, generate_zhegalkin_polynomial, Properties,
};
use crate::error::Result;
use crate::formula::Formula;
use crate::table::{extract_output_column, TruthTable};

/// Language of the report labels.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Language {
    #[default]
    Ukrainian,
    English,
}

/// Text fragments of a report.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Labels {
    pub truth_table: &'static str,
    pub dual: &'static str,
    pub dnf: &'static str,
    pub knf: &'static str,
    pub zhegalkin: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
}

impl Language {
    pub fn labels(self) -> Labels {
        match self {
            Language::Ukrainian => Labels {
                truth_table: "Таблиця істинності:",
                dual: "Функція двоїсту",
                dnf: "ДНФ",
                knf: "КНФ",
                zhegalkin: "Поліном Жегалкіна",
                yes: "Так",
                no: "Ні",
            },
            Language::English => Labels {
                truth_table: "Truth table:",
                dual: "Dual function",
                dnf: "DNF",
                knf: "KNF",
                zhegalkin: "Zhegalkin polynomial",
                yes: "Yes",
                no: "No",
            },
        }
    }
}

impl Labels {
    pub fn answer(&self, value: bool) -> &'static str {
        if value {
            self.yes
        } else {
            self.no
        }
    }
}

/// Column headers of a table over `num_vars` inputs, followed by `F`.
pub fn header(num_vars: usize) -> Vec<String> {
    let mut columns: Vec<String> = if num_vars == 3 {
        ["x", "y", "z"].iter().map(|s| s.to_string()).collect()
    } else {
        (1..=num_vars).map(|i| format!("x{}", i)).collect()
    };
    columns.push("F".to_string());
    columns
}

/// Everything computed about one function.
#[derive(Debug, Clone)]
pub struct Report {
    table: TruthTable,
    dual: Formula,
    dnf: Formula,
    knf: Formula,
    zhegalkin: Formula,
    properties: Properties,
}

impl Report {
    /// Runs every analysis on `table`.
    pub fn analyze(table: &TruthTable) -> Result<Self> {
        let num_vars = table.num_vars();
        let f = extract_output_column(table);
        info!("Analysing F = {} over {} variables", f, num_vars);

        let report = Report {
            table: table.clone(),
            dual: find_dual_function(table, &f)?,
            dnf: build_dnf(&f, num_vars)?,
            knf: build_knf(&f, num_vars)?,
            zhegalkin: generate_zhegalkin_polynomial(&f),
            properties: classify(&f),
        };
        info!("Properties: {:?}", report.properties);
        Ok(report)
    }

    pub fn table(&self) -> &TruthTable {
        &self.table
    }

    pub fn dual(&self) -> &Formula {
        &self.dual
    }

    pub fn dnf(&self) -> &Formula {
        &self.dnf
    }

    pub fn knf(&self) -> &Formula {
        &self.knf
    }

    pub fn zhegalkin(&self) -> &Formula {
        &self.zhegalkin
    }

    pub fn properties(&self) -> Properties {
        self.properties
    }

    /// Writes the report: truth table, four formulas, four predicates.
    pub fn write_to<W: Write>(&self, w: &mut W, language: Language) -> Result<()> {
        let labels = language.labels();

        writeln!(w, "{}", labels.truth_table)?;
        writeln!(w, "{}", header(self.table.num_vars()).join("  "))?;
        for (assignment, output) in self.table.rows() {
            let cells: Vec<String> = assignment
                .bits()
                .chain(std::iter::once(output))
                .map(|bit| u8::from(bit).to_string())
                .collect();
            writeln!(w, "{}", cells.join("  "))?;
        }

        writeln!(w)?;
        writeln!(w, "{}: {}", labels.dual, self.dual)?;
        writeln!(w)?;
        writeln!(w, "{}: {}", labels.dnf, self.dnf)?;
        writeln!(w)?;
        writeln!(w, "{}: {}", labels.knf, self.knf)?;
        writeln!(w)?;
        writeln!(w, "{}: {}", labels.zhegalkin, self.zhegalkin)?;

        let p = self.properties;
        writeln!(w, "Is Zero Constant: {}", labels.answer(p.constant_zero))?;
        writeln!(w, "Is One Constant: {}", labels.answer(p.constant_one))?;
        writeln!(w, "Is Monotonic: {}", labels.answer(p.monotonic))?;
        writeln!(w, "Is Linear: {}", labels.answer(p.linear))?;
        Ok(())
    }

    /// The report as a string.
    pub fn render(&self, language: Language) -> Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, language)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
