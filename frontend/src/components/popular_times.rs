use yew::prelude::*;
use web_sys::HtmlCanvasElement;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;

use crate::catalog::site::{Busyness, POPULAR_TIMES, quietest_hour};

const NAVY: RGBColor = RGBColor(15, 31, 61);
const CRIMSON: RGBColor = RGBColor(200, 16, 46);
const STEEL: RGBColor = RGBColor(120, 134, 156);

fn bar_color(level: u32) -> RGBColor {
    match Busyness::from_percent(level) {
        Busyness::Busy => CRIMSON,
        Busyness::Moderate => NAVY,
        Busyness::Calm => STEEL,
    }
}

fn draw(canvas: HtmlCanvasElement) -> Result<(), String> {
    canvas.set_width(600);
    canvas.set_height(320);

    let backend = CanvasBackend::with_canvas_object(canvas)
        .ok_or_else(|| "canvas has no 2d context".to_string())?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE).map_err(|e| format!("{:?}", e))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0..POPULAR_TIMES.len(), 0u32..100u32)
        .map_err(|e| format!("{:?}", e))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(POPULAR_TIMES.len())
        .x_label_formatter(&|x| {
            POPULAR_TIMES
                .get(*x)
                .map(|(hour, _)| hour.to_string())
                .unwrap_or_default()
        })
        .y_label_formatter(&|y| format!("{}%", y))
        .draw()
        .map_err(|e| format!("{:?}", e))?;

    chart
        .draw_series(POPULAR_TIMES.iter().enumerate().map(|(i, (_, level))| {
            Rectangle::new([(i, 0u32), (i + 1, *level)], bar_color(*level).filled())
        }))
        .map_err(|e| format!("{:?}", e))?;

    root.present().map_err(|e| format!("{:?}", e))?;
    Ok(())
}

#[function_component(PopularTimes)]
pub fn popular_times() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Err(e) = draw(canvas) {
                        log::warn!("popular times chart not drawn: {}", e);
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="popular-times">
            <canvas
                ref={canvas_ref}
                width="600"
                height="320"
                style="max-width: 100%;"
            />
            <ul class="popular-times-legend">
                { for POPULAR_TIMES.iter().map(|(hour, level)| html! {
                    <li>
                        <span class="hour">{*hour}</span>
                        <span class="level">{Busyness::from_percent(*level).label()}</span>
                    </li>
                }) }
            </ul>
            {
                if let Some(hour) = quietest_hour() {
                    html! { <p class="popular-times-note">{format!("* Usually not too busy at {} - Best time to visit", hour)}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busiest_hours_are_highlighted() {
        assert_eq!(bar_color(80), CRIMSON);
        assert_eq!(bar_color(55), NAVY);
        assert_eq!(bar_color(30), STEEL);
    }
}
