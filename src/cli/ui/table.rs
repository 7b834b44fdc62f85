//! Minimal column-aligned table rendering for catalog listings.

/// Display width in characters (not bytes), so names like `Portimão` align.
pub fn visible_width(text: &str) -> usize {
    text.chars().count()
}

pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| visible_width(h)).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(idx) {
                *width = (*width).max(visible_width(cell));
            }
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(headers.iter().map(|h| h.to_string()), &widths));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in rows {
        lines.push(render_row(row.iter().cloned(), &widths));
    }
    lines.join("\n")
}

fn render_row(cells: impl Iterator<Item = String>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(visible_width(&cell));
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligns_columns_by_character_width() {
        let table = render_table(
            &["ID", "Where"],
            &[
                vec!["1".into(), "Portimão".into()],
                vec!["22".into(), "Lagos".into()],
            ],
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "ID  Where");
        assert_eq!(lines[1], "--  --------");
        assert_eq!(lines[2], "1   Portimão");
        assert_eq!(lines[3], "22  Lagos");
    }
}
