use super::{
    formatter::format_hours,
    pdf::{ManualRow, ReportRow},
    selector::ClientOption,
    summary::{SummaryTotals, WeekHours},
};
use prettytable::{format, row, Table};

pub struct View {}

impl View {
    pub fn rows(rows: &[ReportRow], manual_row: Option<&ManualRow>, separator: char) {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        table.set_titles(row!["DESCRIPTION", "TASK", "DATE", r->"HOURS"]);
        for line in rows {
            table.add_row(row![line.description, line.task, line.date, r->format_hours(line.hours, separator)]);
        }
        if let Some(manual) = manual_row {
            table.add_row(row![i->manual.description, "", "", r->format_hours(manual.hours, separator)]);
        }
        let total: f64 = rows.iter().map(|line| line.hours).sum();
        table.add_row(row![b->"TOTAL", "", "", br->format_hours(total, separator)]);
        table.printstd();
    }

    pub fn clients(clients: &[ClientOption]) {
        let mut table = Table::new();

        table.add_row(row!["#", "CLIENT", "ID"]);
        for (index, client) in clients.iter().enumerate() {
            table.add_row(row![index + 1, client.name, client.id]);
        }
        table.printstd();
    }

    pub fn weeks(weeks: &[WeekHours], separator: char) {
        let mut table = Table::new();

        table.add_row(row!["WEEK", r->"HOURS"]);
        for week in weeks {
            table.add_row(row![week.label(), r->format_hours(week.hours, separator)]);
        }
        table.add_row(row![b->"TOTAL", br->format_hours(weeks.total_hours(), separator)]);
        table.printstd();
    }
}
