use crate::chart::ChartSnapshot;
use crate::directions::arc::arc_of_direction;
use crate::directions::table::PrimaryDirectionTable;
use crate::directions::terms::TermTable;
use crate::directions::types::{
    ArcPair, Direction, DirectionPoint, DirectionSettings, DirectionType, PointCode, PointKind,
};
use crate::equatorial::EclipticProjection;
use crate::error::Result;
use crate::zodiac::Sign;

/// Primary directions of one chart.
///
/// Builds promissor and significator points from the snapshot and computes
/// arcs between them with the semi-arc method.
pub struct PrimaryDirections<'a> {
    chart: &'a ChartSnapshot,
    settings: DirectionSettings,
    terms: TermTable,
    projection: EclipticProjection,
    mc_ra: f64,
}

impl<'a> PrimaryDirections<'a> {
    pub fn new(chart: &'a ChartSnapshot, settings: DirectionSettings) -> Result<Self> {
        let terms = settings.term_table()?;
        Self::with_terms(chart, settings, terms)
    }

    pub fn with_terms(
        chart: &'a ChartSnapshot,
        settings: DirectionSettings,
        terms: TermTable,
    ) -> Result<Self> {
        chart.validate()?;
        terms.validate()?;
        let projection = settings.projection();
        let mc_ra = chart.meridian_ra(&projection)?;
        Ok(Self {
            chart,
            settings,
            terms,
            projection,
            mc_ra,
        })
    }

    pub fn settings(&self) -> &DirectionSettings {
        &self.settings
    }

    pub fn meridian_ra(&self) -> f64 {
        self.mc_ra
    }

    fn point(
        &self,
        kind: PointKind,
        body: &str,
        aspect: f64,
        term_sign: Option<Sign>,
        lat: f64,
        lon: f64,
    ) -> DirectionPoint {
        DirectionPoint::new(kind, body, aspect, term_sign, lat, lon, &self.projection)
    }

    // === Point fabrication === //

    /// Start of `body`'s term in `sign`.
    pub fn term(&self, body: &str, sign: Sign) -> Result<DirectionPoint> {
        let lon = self.terms.lookup(body, sign)?;
        Ok(self.point(PointKind::Term, body, 0.0, Some(sign), 0.0, lon))
    }

    pub fn antiscia(&self, body: &str) -> Result<DirectionPoint> {
        let mirror = self.chart.get(body)?.antiscia();
        Ok(self.point(PointKind::Antiscia, body, 0.0, None, mirror.lat, mirror.lon))
    }

    pub fn contra_antiscia(&self, body: &str) -> Result<DirectionPoint> {
        let mirror = self.chart.get(body)?.contra_antiscia();
        Ok(self.point(PointKind::ContraAntiscia, body, 0.0, None, mirror.lat, mirror.lon))
    }

    pub fn dexter(&self, body: &str, aspect: f64) -> Result<DirectionPoint> {
        let source = self.chart.get(body)?;
        let moved = source.relocate(source.lon - aspect);
        Ok(self.point(PointKind::DexterAspect, body, aspect, None, moved.lat, moved.lon))
    }

    pub fn sinister(&self, body: &str, aspect: f64) -> Result<DirectionPoint> {
        let source = self.chart.get(body)?;
        let moved = source.relocate(source.lon + aspect);
        Ok(self.point(PointKind::SinisterAspect, body, aspect, None, moved.lat, moved.lon))
    }

    /// The body itself (offset 0) or its opposition point (offset 180).
    pub fn body(&self, body: &str, aspect: f64) -> Result<DirectionPoint> {
        let source = self.chart.get(body)?;
        let moved = source.relocate(source.lon + aspect);
        Ok(self.point(PointKind::Body, body, aspect, None, moved.lat, moved.lon))
    }

    /// Rebuilds a point from its code, e.g. `D_mars_90` or `T_venus_aries`.
    pub fn point_from_code(&self, code: &str) -> Result<DirectionPoint> {
        match code.parse::<PointCode>()? {
            PointCode::Body { body, aspect } => self.body(&body, aspect),
            PointCode::Term { body, sign } => self.term(&body, sign),
            PointCode::Antiscia { body } => self.antiscia(&body),
            PointCode::ContraAntiscia { body } => self.contra_antiscia(&body),
            PointCode::Dexter { body, aspect } => self.dexter(&body, aspect),
            PointCode::Sinister { body, aspect } => self.sinister(&body, aspect),
        }
    }

    /// Direction between two coded points, with its arc recomputed for this chart.
    pub fn direction_from_codes(
        &self,
        promissor: &str,
        significator: &str,
        direction_type: DirectionType,
    ) -> Result<Direction> {
        let promissor = self.point_from_code(promissor)?;
        let significator = self.point_from_code(significator)?;
        let arc = self.get_arc(&promissor, &significator).get(direction_type);
        Ok(Direction {
            arc,
            promissor,
            significator,
            direction_type,
        })
    }

    // === Arcs === //

    /// Mundane and zodiacal arcs from `promissor` to `significator`.
    pub fn get_arc(&self, promissor: &DirectionPoint, significator: &DirectionPoint) -> ArcPair {
        let arc = |direction_type| {
            arc_of_direction(
                promissor.coords(direction_type),
                significator.coords(direction_type),
                self.mc_ra,
                self.chart.latitude,
            )
        };
        ArcPair {
            mundane: arc(DirectionType::Mundane),
            zodiacal: arc(DirectionType::Zodiacal),
        }
    }

    fn build_directions(
        &self,
        promissor: &DirectionPoint,
        significator: &DirectionPoint,
    ) -> Vec<Direction> {
        if promissor.body() == significator.body() {
            return Vec::new();
        }

        let arcs = self.get_arc(promissor, significator);
        [DirectionType::Mundane, DirectionType::Zodiacal]
            .into_iter()
            .filter_map(|direction_type| {
                let arc = arcs.get(direction_type);
                (arc > 0.0 && arc < self.settings.max_arc).then(|| Direction {
                    arc,
                    promissor: promissor.clone(),
                    significator: significator.clone(),
                    direction_type,
                })
            })
            .collect()
    }

    // === Catalogue === //

    /// Configured bodies and angles at their own positions.
    pub fn significators(&self) -> Result<Vec<DirectionPoint>> {
        self.settings
            .significators
            .iter()
            .chain(self.settings.angles.iter())
            .map(|id| self.body(id, 0.0))
            .collect()
    }

    /// Aspect points, mirrors and terms for the configured promissor bodies.
    ///
    /// Conjunctions and oppositions yield the body point; every other angle
    /// yields a dexter and a sinister point.
    pub fn promissors(&self, aspects: &[f64]) -> Result<Vec<DirectionPoint>> {
        let bodies = &self.settings.promissors;
        let mut res = Vec::new();

        for &aspect in aspects {
            if aspect == 0.0 || aspect == 180.0 {
                for body in bodies {
                    res.push(self.body(body, aspect)?);
                }
            } else {
                for body in bodies {
                    res.push(self.dexter(body, aspect)?);
                }
                for body in bodies {
                    res.push(self.sinister(body, aspect)?);
                }
            }
        }

        for entry in self.terms.entries() {
            res.push(self.term(&entry.body, entry.sign)?);
        }
        for body in bodies {
            res.push(self.antiscia(body)?);
        }
        for body in bodies {
            res.push(self.contra_antiscia(body)?);
        }
        Ok(res)
    }

    /// All directions with an arc strictly between zero and the ceiling.
    pub fn build_table(&self, aspects: &[f64]) -> Result<PrimaryDirectionTable> {
        let significators = self.significators()?;
        let promissors = self.promissors(aspects)?;

        let mut directions = Vec::new();
        for promissor in &promissors {
            for significator in &significators {
                directions.extend(self.build_directions(promissor, significator));
            }
        }

        log::debug!(
            "Built primary directions: {} promissors x {} significators -> {} directions",
            promissors.len(),
            significators.len(),
            directions.len()
        );
        Ok(PrimaryDirectionTable::new(directions))
    }
}

/// Builds the primary direction table of a chart.
pub fn build_table(
    chart: &ChartSnapshot,
    aspects: &[f64],
    settings: DirectionSettings,
) -> Result<PrimaryDirectionTable> {
    PrimaryDirections::new(chart, settings)?.build_table(aspects)
}
