//! One-shot cache for intermediates shared between analyzers.

use kundali_base::{
    AllYogas, Aspect, Chart, ChartError, DivisionalChart, HouseAspectAnalysis, RajaYogaConfig,
    aspects_of, aspects_on_house, build_divisional_chart, detect_all_yogas,
};

/// Function-local cache for one report run.
///
/// Every slot is derived from the borrowed chart, which never changes,
/// so nothing is ever invalidated. Not persisted across calls.
#[derive(Debug, Clone)]
pub struct AnalysisContext<'a> {
    chart: &'a Chart,
    aspects: Option<Vec<Aspect>>,
    house_aspects: Option<Vec<HouseAspectAnalysis>>,
    yogas: Option<AllYogas>,
    navamsa: Option<DivisionalChart>,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(chart: &'a Chart) -> Self {
        Self {
            chart,
            aspects: None,
            house_aspects: None,
            yogas: None,
            navamsa: None,
        }
    }

    pub fn chart(&self) -> &'a Chart {
        self.chart
    }

    /// Graha-to-graha aspects.
    pub fn aspects(&mut self) -> &[Aspect] {
        let chart = self.chart;
        self.aspects.get_or_insert_with(|| aspects_of(chart))
    }

    /// Every aspect falling on every house, interpreted, ordered by house.
    pub fn house_aspects(&mut self) -> Result<&[HouseAspectAnalysis], ChartError> {
        let effects = match self.house_aspects.take() {
            Some(v) => v,
            None => {
                let mut out = Vec::new();
                for house in 1..=12 {
                    out.extend(aspects_on_house(self.chart, house)?);
                }
                out
            }
        };
        Ok(self.house_aspects.insert(effects))
    }

    pub fn yogas(&mut self, config: &RajaYogaConfig) -> &AllYogas {
        let chart = self.chart;
        self.yogas
            .get_or_insert_with(|| detect_all_yogas(chart, config))
    }

    /// D9 projection of the chart.
    pub fn navamsa(&mut self) -> Result<&DivisionalChart, ChartError> {
        let d9 = match self.navamsa.take() {
            Some(d) => d,
            None => build_divisional_chart(self.chart, 9)?,
        };
        Ok(self.navamsa.insert(d9))
    }
}
