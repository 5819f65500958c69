// Grouping report emission.
//
// Three files per grouping run, all under one threshold-named subfolder:
//   table.csv             presence table, one row per super-topic, an X in
//                         every month column the super-topic touches
//   table_words.txt       human-readable word union + member list
//   table_words_index.csv machine-readable index of the same
//
// Components must already be in canonical order; numbering is positional.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::corpus::{TopicNode, TopicStore};
use crate::period::PeriodRange;

use super::component_words;

/// Marker placed in a month column the super-topic occurs in.
const PRESENCE_MARKER: &str = "X";

/// Paths of the files one grouping run produced.
pub struct ReportPaths {
    pub table: PathBuf,
    pub words: PathBuf,
    pub index: PathBuf,
}

/// Write all three report files for `components` into `out_dir`.
pub fn write_reports(
    components: &[Vec<TopicNode>],
    topics: &TopicStore,
    range: PeriodRange,
    out_dir: &Path,
) -> Result<ReportPaths> {
    fs::create_dir_all(out_dir).with_context(|| {
        format!("failed to create grouping folder {}", out_dir.display())
    })?;

    let paths = ReportPaths {
        table: out_dir.join("table.csv"),
        words: out_dir.join("table_words.txt"),
        index: out_dir.join("table_words_index.csv"),
    };

    let mut table = writer(&paths.table)?;
    let mut words_file = writer(&paths.words)?;
    let mut index = writer(&paths.index)?;

    writeln!(
        table,
        "Topic Number;{};Size of Subset of Topics",
        range.column_labels().join(";")
    )?;
    writeln!(index, "Topic Number;Topics Set;Words Set")?;

    for (position, component) in components.iter().enumerate() {
        let number = position + 1;
        let words = component_words(component, topics);
        let members: Vec<String> = component.iter().map(TopicNode::identifier).collect();

        let mut presence = vec![" "; range.len()];
        for node in component {
            if let Some(column) = range.column_index(node.period) {
                presence[column] = PRESENCE_MARKER;
            }
        }

        writeln!(
            table,
            "{:03};{};{}",
            number,
            presence.join(";"),
            component.len()
        )?;

        writeln!(words_file, "\n\n-------- TOPIC {number:03} --------")?;
        let word_list: Vec<&str> = words.iter().copied().collect();
        writeln!(words_file, "Words: {}", word_list.join(", "))?;
        writeln!(words_file, "Subset of topics: {}", members.join(", "))?;

        writeln!(
            index,
            "{};{};{}",
            number,
            members.join(", "),
            word_list.join(" ")
        )?;
    }

    table.flush()?;
    words_file.flush()?;
    index.flush()?;

    info!(
        super_topics = components.len(),
        dir = %out_dir.display(),
        "Grouping reports written"
    );
    Ok(paths)
}

fn writer(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("failed to create report file {}", path.display()))?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::Period;

    fn node(year: i32, month: u32, topic: u32) -> TopicNode {
        TopicNode::new(Period::new(year, month), topic)
    }

    #[test]
    fn table_rows_mark_touched_months() {
        let range = PeriodRange::new(2015, 2016).unwrap();
        let mut store = TopicStore::new(1);
        let a = node(2015, 1, 1);
        let b = node(2016, 3, 1);
        store.insert(a, vec!["word".into()]);
        store.insert(b, vec!["word".into()]);

        let dir = std::env::temp_dir().join("supertopics-report-markers");
        let paths = write_reports(&[vec![a, b]], &store, range, &dir).unwrap();

        let table = fs::read_to_string(&paths.table).unwrap();
        let mut lines = table.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("Topic Number;01/2015;02/2015;"));
        assert!(header.ends_with("12/2016;Size of Subset of Topics"));

        let row: Vec<&str> = lines.next().unwrap().split(';').collect();
        // 1 numbering column + 24 month columns + size column
        assert_eq!(row.len(), 26);
        assert_eq!(row[0], "001");
        assert_eq!(row[1], "X"); // 2015_01
        assert_eq!(row[15], "X"); // 2016_03, column index 14
        assert_eq!(row[2], " ");
        assert_eq!(row[25], "2");
    }

    #[test]
    fn words_file_lists_union_and_members() {
        let range = PeriodRange::new(2015, 2015).unwrap();
        let mut store = TopicStore::new(1);
        let a = node(2015, 1, 1);
        let b = node(2015, 2, 1);
        store.insert(a, vec!["beta".into(), "alpha".into()]);
        store.insert(b, vec!["alpha".into(), "gamma".into()]);

        let dir = std::env::temp_dir().join("supertopics-report-words");
        let paths = write_reports(&[vec![a, b]], &store, range, &dir).unwrap();

        let words = fs::read_to_string(&paths.words).unwrap();
        assert!(words.contains("-------- TOPIC 001 --------"));
        assert!(words.contains("Words: alpha, beta, gamma"));
        assert!(words.contains("Subset of topics: 2015_01_topic_01, 2015_02_topic_01"));

        let index = fs::read_to_string(&paths.index).unwrap();
        assert!(index.starts_with("Topic Number;Topics Set;Words Set\n"));
        assert!(index.contains("1;2015_01_topic_01, 2015_02_topic_01;alpha beta gamma"));
    }
}
