//! The `plot_any` entry point

use std::sync::Arc;

use tracing::debug;

use crate::data::{validate_series, Series};
use crate::error::{PlotError, PlotResult};
use crate::figure::{axis, AxisName, Figure};
use crate::render::PlotKind;
use crate::style::palette_color;

use super::config::PlotConfig;

/// Draw every series with one strategy and style the result
///
/// Series `i` is drawn in palette colour `i mod 10` and labelled with
/// `labels[i]` when labels are given; an empty label list means no legend.
/// The figure is saved when `config.save` is set. It is returned when
/// `config.show` is set and dropped otherwise.
///
/// Every input is checked before the figure exists, so an error never leaves
/// a half-drawn chart behind.
///
/// # Errors
///
/// - [`PlotError::EmptySeriesCollection`] / [`PlotError::InputShape`] for bad series
/// - [`PlotError::LabelCountMismatch`] if labels and series differ in count
/// - [`PlotError::InvalidAxisLimits`] for unusable limits
/// - any error from [`Figure::save`]
///
/// # Example
///
/// ```rust,no_run
/// use plotkit::prelude::*;
///
/// let series = vec![
///     Series::from_points(&[(0.0, 1.0), (1.0, 3.0), (2.0, 2.0)]),
///     Series::from_points(&[(0.0, 2.0), (1.0, 1.0), (2.0, 4.0)]),
/// ];
/// let config = PlotConfig::default()
///     .labels(["first", "second"])
///     .title("Two lines")
///     .save(true)
///     .savename("two_lines.png")
///     .show(false);
///
/// let figure = plot_any(&series, &config)?;
/// assert!(figure.is_none());
/// # Ok::<(), plotkit::PlotError>(())
/// ```
pub fn plot_any(series: &[Series], config: &PlotConfig) -> PlotResult<Option<Figure>> {
    validate(series, config)?;

    debug!(
        series = series.len(),
        kind = %config.plotcase,
        labelled = given_labels(config).is_some(),
        "plotting"
    );

    let mut figure = Figure::new(config.figure_style());

    let labels = given_labels(config);
    for (i, s) in series.iter().enumerate() {
        let label = labels.and_then(|labels| labels.get(i)).map(String::as_str);
        figure.plot(config.plotcase, s, palette_color(i), label, &config.render)?;
    }

    if let Some((lower, upper)) = config.xlims {
        figure.set_xlim(lower, upper)?;
    }
    if let Some((lower, upper)) = config.ylims {
        figure.set_ylim(lower, upper)?;
    }
    figure.set_x_label(config.x_label.as_str());
    figure.set_y_label(config.y_label.as_str());
    figure.set_title(config.title.as_str());
    figure.set_grid(config.grid);

    if labels.is_some() {
        figure.show_legend();
    }

    for axis in &config.invert {
        figure.invert_axis(*axis);
    }

    if let Some(formatter) = &config.formatfuncx {
        figure.set_major_formatter(AxisName::X, Arc::clone(formatter));
    }
    if let Some(formatter) = &config.formatfuncy {
        figure.set_major_formatter(AxisName::Y, Arc::clone(formatter));
    }

    if config.save {
        figure.save(&config.savename)?;
    }

    if !config.show {
        debug!("releasing figure");
        return Ok(None);
    }
    Ok(Some(figure))
}

/// Labels to draw; an empty list counts as no labels
fn given_labels(config: &PlotConfig) -> Option<&[String]> {
    config.labels.as_deref().filter(|labels| !labels.is_empty())
}

fn validate(series: &[Series], config: &PlotConfig) -> PlotResult<()> {
    validate_series(series)?;

    if let Some(labels) = given_labels(config) {
        if labels.len() != series.len() {
            return Err(PlotError::LabelCountMismatch {
                labels: labels.len(),
                series: series.len(),
            });
        }
    }

    if config.plotcase == PlotKind::VLines {
        config.render.validate_for(series)?;
    }

    if let Some(limits) = config.xlims {
        axis::validate_limits(AxisName::X, limits)?;
    }
    if let Some(limits) = config.ylims {
        axis::validate_limits(AxisName::Y, limits)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::AxisDirection;
    use crate::format::{ps_time, tick_formatter};
    use crate::render::VLineOrigin;
    use crate::style::FigureStyle;

    fn config() -> PlotConfig {
        PlotConfig::default().style(FigureStyle::default().with_size(400, 300).with_font_size(10.0))
    }

    fn ramp(n: usize, offset: f64) -> Series {
        Series::from_y((0..n).map(|i| i as f64 + offset).collect())
    }

    #[test]
    fn test_one_trace_per_series() {
        let series: Vec<Series> = (0..3).map(|i| ramp(4, i as f64)).collect();
        let figure = plot_any(&series, &config()).unwrap().unwrap();
        assert_eq!(figure.traces().len(), 3);
        for (i, trace) in figure.traces().iter().enumerate() {
            assert_eq!(trace.color(), palette_color(i));
            assert_eq!(trace.kind(), PlotKind::Lines);
        }
    }

    #[test]
    fn test_labels_matched_by_position() {
        let series = vec![ramp(3, 0.0), ramp(3, 1.0)];
        let figure = plot_any(&series, &config().labels(["a", "b"])).unwrap().unwrap();
        let labels: Vec<_> = figure.traces().iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec![Some("a"), Some("b")]);
        assert!(figure.has_legend());
    }

    #[test]
    fn test_no_labels_no_legend() {
        let figure = plot_any(&[ramp(3, 0.0)], &config()).unwrap().unwrap();
        assert!(!figure.has_legend());
        assert!(figure.legend_entries().is_empty());
    }

    #[test]
    fn test_label_count_mismatch() {
        let err = plot_any(&[ramp(3, 0.0)], &config().labels(["a", "b"])).unwrap_err();
        assert!(matches!(err, PlotError::LabelCountMismatch { labels: 2, series: 1 }));
    }

    #[test]
    fn test_empty_collection() {
        assert!(matches!(
            plot_any(&[], &config()),
            Err(PlotError::EmptySeriesCollection)
        ));
    }

    #[test]
    fn test_input_shape_reports_index() {
        let bad = Series { x: vec![0.0, 1.0], y: vec![0.0] };
        let err = plot_any(&[ramp(2, 0.0), bad], &config()).unwrap_err();
        assert!(matches!(err, PlotError::InputShape { index: 1, .. }));
    }

    #[test]
    fn test_vline_origin_length_checked() {
        let config = config().plotcase(PlotKind::VLines).origin(vec![0.0, 0.0]);
        let err = plot_any(&[ramp(3, 0.0)], &config).unwrap_err();
        assert!(matches!(err, PlotError::InputShape { index: 0, x_len: 3, y_len: 2 }));
    }

    #[test]
    fn test_vline_origin_ignored_for_lines() {
        let config = config().origin(vec![0.0]);
        assert!(plot_any(&[ramp(3, 0.0)], &config).is_ok());
    }

    #[test]
    fn test_per_point_origin() {
        let config = config()
            .plotcase(PlotKind::VLines)
            .origin(VLineOrigin::PerPoint(vec![-1.0, -2.0, -3.0]));
        let figure = plot_any(&[ramp(3, 1.0)], &config).unwrap().unwrap();
        assert!(figure.y_axis().lower < -3.0);
    }

    #[test]
    fn test_limits_applied() {
        let config = config().xlims(-1.0, 1.0).ylims(10.0, 0.0);
        let figure = plot_any(&[ramp(3, 0.0)], &config).unwrap().unwrap();
        assert_eq!((figure.x_axis().lower, figure.x_axis().upper), (-1.0, 1.0));
        assert_eq!(figure.y_axis().direction(), AxisDirection::Decreasing);
    }

    #[test]
    fn test_invalid_limits_rejected() {
        let err = plot_any(&[ramp(3, 0.0)], &config().ylims(2.0, f64::INFINITY)).unwrap_err();
        assert!(matches!(err, PlotError::InvalidAxisLimits { axis: AxisName::Y, .. }));

        let err = plot_any(&[ramp(3, 0.0)], &config().xlims(-f64::MAX, f64::MAX)).unwrap_err();
        assert!(matches!(err, PlotError::InvalidAxisLimits { axis: AxisName::X, .. }));
    }

    #[test]
    fn test_equal_limits_render() {
        let figure = plot_any(&[ramp(3, 0.0)], &config().xlims(5.0, 5.0)).unwrap().unwrap();
        let x = figure.x_axis();
        assert!(x.lower < 5.0 && 5.0 < x.upper);
    }

    #[test]
    fn test_empty_labels_mean_no_legend() {
        let config = config().labels(Vec::<String>::new());
        let figure = plot_any(&[ramp(3, 0.0)], &config).unwrap().unwrap();
        assert!(!figure.has_legend());
        assert_eq!(figure.traces()[0].label(), None);
    }

    #[test]
    fn test_invert_toggles() {
        let series = [ramp(3, 0.0)];
        let figure = plot_any(&series, &config().invert([AxisName::X, AxisName::Y])).unwrap().unwrap();
        assert!(figure.x_axis().inverted && figure.y_axis().inverted);

        let figure = plot_any(&series, &config().invert([AxisName::X, AxisName::X])).unwrap().unwrap();
        assert!(!figure.x_axis().inverted);
    }

    #[test]
    fn test_formatters_installed() {
        let config = config().formatfuncy(tick_formatter(ps_time));
        let figure = plot_any(&[ramp(3, 0.0)], &config).unwrap().unwrap();
        assert_eq!(figure.tick_label(AxisName::Y, 2_000.0), "2 ns");
        assert_eq!(figure.tick_label(AxisName::X, 2_000.0), "2000");
    }

    #[test]
    fn test_text_applied() {
        let config = config().title("T").x_label("X").y_label("Y").grid(true);
        let figure = plot_any(&[ramp(3, 0.0)], &config).unwrap().unwrap();
        assert_eq!((figure.title(), figure.x_label(), figure.y_label()), ("T", "X", "Y"));
        assert!(figure.grid());
    }

    #[test]
    fn test_show_false_releases_figure() {
        assert!(plot_any(&[ramp(3, 0.0)], &config().show(false)).unwrap().is_none());
    }
}
