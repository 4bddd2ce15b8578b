use std::time::Duration;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::app::App;
use crate::render::{Page, RegionId, Surface};
use crate::system::snapshot::{NetworkData, ProcessEntry, Snapshot};
use crate::ui::theme::Theme;
use crate::ui::{draw, header, lists, statusbar};

fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            let cell = buf.cell((x, y)).unwrap();
            out.push_str(cell.symbol());
        }
        if y + 1 < area.height {
            out.push('\n');
        }
    }
    out
}

fn render_to_string<F>(width: u16, height: u16, draw: F) -> String
where
    F: FnOnce(&mut ratatui::Frame),
{
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(draw).unwrap();
    let buf = terminal.backend().buffer();
    buffer_to_string(buf)
}

fn make_snapshot() -> Snapshot {
    Snapshot {
        total_memory: Some(17_179_869_184),
        used_memory: Some(6_442_450_944),
        networks: Some(vec![NetworkData {
            interface_name: "eth0".into(),
            total_received: 1_048_576,
            total_transmitted: 2048,
        }]),
        components: Some(vec!["coretemp: 48.0°C".into()]),
        processes: Some(vec![
            ProcessEntry {
                pid: 1,
                name: "init".into(),
            },
            ProcessEntry {
                pid: 314,
                name: "sshd".into(),
            },
        ]),
    }
}

fn make_app() -> App {
    let mut app = App::new(
        "http://127.0.0.1:3000/api/system",
        Duration::from_secs(5),
        Theme::dark(),
    );
    app.on_cycle(Ok(make_snapshot()));
    app
}

#[test]
fn header_shows_memory_fields() {
    let mut page = Page::new();
    page.set_text(RegionId::TotalMemory, "16.00 GB");
    page.set_text(RegionId::UsedMemory, "6.00 GB");

    let output = render_to_string(80, 3, |frame| {
        header::render(frame, Rect::new(0, 0, 80, 3), &page, &Theme::dark());
    });

    assert!(output.contains("sysmonitor"));
    assert!(output.contains("Total memory: 16.00 GB"));
    assert!(output.contains("Used memory: 6.00 GB"));
}

#[test]
fn list_panel_shows_title_count_and_items() {
    let items = vec!["PID 1: init".to_string(), "PID 2: kthreadd".to_string()];
    let output = render_to_string(30, 6, |frame| {
        lists::render(
            frame,
            Rect::new(0, 0, 30, 6),
            lists::ListView {
                region: RegionId::ProcessList,
                items: &items,
                offset: 0,
                focused: true,
            },
            &Theme::dark(),
        );
    });

    assert!(output.contains("Processes (2)"));
    assert!(output.contains("PID 1: init"));
    assert!(output.contains("PID 2: kthreadd"));
}

#[test]
fn list_panel_scroll_hides_leading_items() {
    let items: Vec<String> = (1..=6).map(|pid| format!("PID {pid}: p{pid}")).collect();
    let output = render_to_string(30, 5, |frame| {
        lists::render(
            frame,
            Rect::new(0, 0, 30, 5),
            lists::ListView {
                region: RegionId::ProcessList,
                items: &items,
                offset: 2,
                focused: false,
            },
            &Theme::dark(),
        );
    });

    assert!(!output.contains("PID 1: p1"));
    assert!(!output.contains("PID 2: p2"));
    assert!(output.contains("PID 3: p3"));
    assert!(output.contains("PID 5: p5"));
    assert!(!output.contains("PID 6: p6"));
}

#[test]
fn empty_list_panel_renders_no_items() {
    let output = render_to_string(30, 4, |frame| {
        lists::render(
            frame,
            Rect::new(0, 0, 30, 4),
            lists::ListView {
                region: RegionId::NetworkList,
                items: &[],
                offset: 0,
                focused: false,
            },
            &Theme::dark(),
        );
    });

    assert!(output.contains("Networks (0)"));
    let inner_rows: Vec<&str> = output.lines().skip(1).take(2).collect();
    for row in inner_rows {
        assert!(row.chars().skip(1).take(28).all(|c| c == ' '), "{row:?}");
    }
}

#[test]
fn statusbar_shows_keys_and_endpoint() {
    let output = render_to_string(100, 1, |frame| {
        statusbar::render(
            frame,
            Rect::new(0, 0, 100, 1),
            "http://127.0.0.1:3000/api/system",
            Duration::from_secs(5),
            &Theme::dark(),
        );
    });

    assert!(output.contains(" q  Quit"));
    assert!(output.contains("Refresh"));
    assert!(output.contains("http://127.0.0.1:3000/api/system every 5s"));
}

#[test]
fn full_frame_draws_every_region() {
    let app = make_app();
    let output = render_to_string(120, 12, |frame| draw(frame, &app));

    assert!(output.contains("Total memory: 16.00 GB"));
    assert!(output.contains("Used memory: 6.00 GB"));
    assert!(output.contains("eth0: 1.00 MB"));
    assert!(output.contains("coretemp: 48.0°C"));
    assert!(output.contains("PID 314: sshd"));
}

#[test]
fn redraw_after_new_snapshot_replaces_lists() {
    let mut app = make_app();
    app.on_cycle(Ok(Snapshot {
        total_memory: Some(17_179_869_184),
        used_memory: Some(7_516_192_768),
        processes: Some(vec![ProcessEntry {
            pid: 999,
            name: "cron".into(),
        }]),
        ..Snapshot::default()
    }));

    let output = render_to_string(120, 12, |frame| draw(frame, &app));

    assert!(output.contains("Used memory: 7.00 GB"));
    assert!(output.contains("PID 999: cron"));
    assert!(!output.contains("sshd"));
    assert!(!output.contains("eth0"));
    assert!(output.contains("Networks (0)"));
}
