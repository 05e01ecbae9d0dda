use lingvo_protocol::AnalyzedWord;
use lingvo_session::HistoryEntry;

const HEADERS: [&str; 5] = ["Слово", "Часть речи", "Признаки", "Роль", "Детали"];

fn row(word: &AnalyzedWord) -> [String; 5] {
    [
        word.word.clone(),
        word.pos_ru.clone(),
        word.features_ru(),
        word.syntax_role_ru.clone().unwrap_or_default(),
        word.details.clone().unwrap_or_default(),
    ]
}

/// Aligned text table, one line per analyzed word.
pub fn table(words: &[AnalyzedWord]) -> String {
    let rows: Vec<[String; 5]> = words.iter().map(row).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(str::to_string), &widths);
    for cells in &rows {
        push_line(&mut out, cells, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

pub fn history_line(entry: &HistoryEntry) -> String {
    format!("#{:<4} [{}] {} ({} words)", entry.id.0, entry.language, entry.text, entry.words.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingvo_parser::analyze;
    use lingvo_protocol::Language;

    #[test]
    fn test_table_has_header_and_one_line_per_word() {
        let words = analyze("Le chat mange", Language::Fr);
        let out = table(&words);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Слово"));
        assert!(lines[2].contains("Подлежащее"));
        assert!(lines[2].contains("chat (masc.) - cat"));
        assert!(lines[3].contains("ед., 3-е лицо"));
    }

    #[test]
    fn test_columns_line_up() {
        let words = analyze("The black cat", Language::En);
        let out = table(&words);
        let offsets: Vec<usize> = out
            .lines()
            .map(|line| line.chars().take_while(|c| *c != ' ').count())
            .collect();
        // The first column is padded to the widest cell ("Слово"/"black").
        assert!(out.lines().skip(1).all(|line| line.chars().nth(5) == Some(' ')));
        assert_eq!(offsets[2], 5);
    }
}
