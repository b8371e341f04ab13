use crate::core::state::App;
use crate::geo::Coordinates;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::Canvas;
use ratatui::widgets::{Block, Paragraph};

/// A renderable marker: where, what to call it, how to paint it.
pub struct Marker {
    pub position: Coordinates,
    pub symbol: char,
    pub title: String,
    pub color: Color,
}

/// Assembles the marker set for the current state: one marker per POI with
/// parseable coordinates, the user marker when a location is known, and the
/// viewport-center marker. Later entries paint over earlier ones, so the
/// center marker goes last.
pub fn collect_markers(app: &App) -> Vec<Marker> {
    let mut markers: Vec<Marker> = app
        .pois
        .iter()
        .filter_map(|poi| {
            let position = poi.position()?;
            Some(Marker {
                position,
                symbol: '•',
                title: poi.name.clone(),
                color: Color::Yellow,
            })
        })
        .collect();

    if let Some(coords) = app.user_location {
        markers.push(Marker {
            position: coords,
            symbol: '●',
            title: "My location".to_string(),
            color: Color::Blue,
        });
    }

    markers.push(Marker {
        position: app.region.center(),
        symbol: '+',
        title: "Center".to_string(),
        color: Color::Red,
    });

    markers
}

pub fn draw_ui(frame: &mut Frame, app: &App) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Min(0), Length(1), Length(1)]);
    let [map_area, coords_area, status_area] = layout.areas(frame.area());

    let region = app.region;
    let markers = collect_markers(app);

    let map = Canvas::default()
        .block(Block::bordered().title("Roam"))
        .x_bounds([
            region.longitude - region.longitude_delta / 2.0,
            region.longitude + region.longitude_delta / 2.0,
        ])
        .y_bounds([
            region.latitude - region.latitude_delta / 2.0,
            region.latitude + region.latitude_delta / 2.0,
        ])
        .paint(|ctx| {
            for marker in &markers {
                if !region.contains(marker.position) {
                    continue;
                }
                ctx.print(
                    marker.position.longitude,
                    marker.position.latitude,
                    Line::from(Span::styled(
                        format!("{} {}", marker.symbol, marker.title),
                        Style::default().fg(marker.color),
                    )),
                );
            }
        });
    frame.render_widget(map, map_area);

    let coords_text = format!(
        "Latitude: {:.6}, Longitude: {:.6}",
        region.latitude, region.longitude
    );
    frame.render_widget(
        Paragraph::new(coords_text).alignment(Alignment::Center),
        coords_area,
    );

    frame.render_widget(Span::raw(app.status_message.as_str()), status_area);
}
