//! Built-in reference layout: a nine-column lesson plan form.

use gridform::{CellSpec, ContentMap, DocumentSpec, Emphasis, RowSpec, SectionSpec, TextSource};

/// Number of grid columns in the lesson plan.
pub const COLUMNS: usize = 9;

/// Layout of the lesson plan form.
///
/// Labels are literal; everything filled in per session is a content key
/// resolved against [`lesson_content`] or a user-supplied map.
pub fn lesson_plan() -> DocumentSpec {
    let mut spec = DocumentSpec::new(COLUMNS);
    spec.banner = Some(TextSource::literal("SESIÓN DE APRENDIZAJE"));
    spec.sections = vec![
        general_information(),
        SectionSpec::titled("I. TÍTULO DE LA SESIÓN")
            .row(RowSpec::new(vec![CellSpec::plain(TextSource::key("session.title"))
                .cols(9)
                .centered()
                .emphasis(Emphasis::Placeholder)]))
            .row(RowSpec::spacer_width(9)),
        purposes_and_evidence(),
        SectionSpec::titled("IMPERATIVOS DE LA CONGREGACIÓN")
            .row(RowSpec::new(vec![CellSpec::items([
                "Corresponsabilidad",
                "Colaboración",
                "Integración",
                "Transformación",
            ])
            .cols(9)
            .centered()
            .emphasis(Emphasis::Strong)]))
            .row(RowSpec::spacer_width(9)),
        session_moments(),
    ];
    spec
}

fn general_information() -> SectionSpec {
    SectionSpec::untitled()
        .row(RowSpec::new(vec![
            CellSpec::header("Área"),
            CellSpec::plain(TextSource::key("area")),
            CellSpec::header("Grado"),
            CellSpec::plain(TextSource::key("grade")),
            CellSpec::header("Secciones"),
            CellSpec::plain(TextSource::key("sections")),
            CellSpec::header("Profesores"),
            CellSpec::plain(TextSource::key("teachers")).cols(2),
        ]))
        .row(RowSpec::new(vec![
            CellSpec::header("Duración").rows(2),
            CellSpec::plain(TextSource::key("duration"))
                .cols(2)
                .centered()
                .emphasis(Emphasis::Strong),
            CellSpec::header("Unidad de Proyecto").cols(2),
            CellSpec::plain(TextSource::key("unit"))
                .centered()
                .emphasis(Emphasis::Strong),
            CellSpec::header("Nro de Sesión"),
            CellSpec::plain(TextSource::key("session.number"))
                .cols(2)
                .centered()
                .emphasis(Emphasis::Strong),
        ]))
        // Column 0 is still held by "Duración".
        .row(RowSpec::spacer_width(8))
}

fn purposes_and_evidence() -> SectionSpec {
    let evidence = RowSpec::new(vec![
        CellSpec::blank().cols(2),
        CellSpec::blank().cols(2),
        CellSpec::blank().cols(2),
        CellSpec::blank().cols(2),
        CellSpec::blank(),
    ]);

    SectionSpec::titled("II. PROPÓSITOS Y EVIDENCIAS DE APRENDIZAJE")
        .row(RowSpec::header(vec![
            CellSpec::header("COMPETENCIA Y CAPACIDADES DEL ÁREA")
                .cols(2)
                .centered(),
            CellSpec::header("DESEMPEÑOS PRECISADOS").cols(2).centered(),
            CellSpec::header("CRITERIOS DE EVALUACIÓN").cols(2).centered(),
            CellSpec::header("EVIDENCIA").cols(2).centered(),
            CellSpec::header("INSTRUMENTO DE EVALUACIÓN").centered(),
        ]))
        .repeat(evidence, 3)
        .row(RowSpec::spacer_width(9))
}

fn session_moments() -> SectionSpec {
    SectionSpec::titled(TextSource::key("moments.title"))
        .row(RowSpec::header(vec![
            CellSpec::header("MOMENTOS").centered(),
            CellSpec::header("PROCESOS PEDAGÓGICOS").cols(2).centered(),
            CellSpec::header("ACTIVIDADES Y/O ESTRATEGIAS")
                .cols(4)
                .centered(),
            CellSpec::header("RECURSOS").centered(),
            CellSpec::header("TIEMPO").centered(),
        ]))
        .row(moment_row(Some(("INICIO", 2)), "start.1"))
        .row(moment_row(None, "start.2"))
        .row(moment_row(Some(("DESARROLLO", 2)), "development.1"))
        .row(moment_row(None, "development.2"))
        .row(moment_row(Some(("CIERRE", 1)), "closing.1"))
}

/// One activity row; the moment label opens a group of `span` rows.
fn moment_row(label: Option<(&str, i32)>, prefix: &str) -> RowSpec {
    let mut cells = Vec::with_capacity(5);
    if let Some((label, span)) = label {
        cells.push(CellSpec::header(label).rows(span));
    }
    cells.push(CellSpec::plain(TextSource::key(format!("{prefix}.process"))).cols(2));
    cells.push(CellSpec::plain(TextSource::key(format!("{prefix}.activities"))).cols(4));
    cells.push(CellSpec::plain(TextSource::key(format!("{prefix}.resources"))));
    cells.push(CellSpec::plain(TextSource::key(format!("{prefix}.time"))).centered());
    RowSpec::new(cells)
}

/// Sample content for [`lesson_plan`].
pub fn lesson_content() -> ContentMap {
    ContentMap::new()
        .with("area", "Informática")
        .with("grade", "2 Sec")
        .with("sections", "ABCD")
        .with("teachers", "Nelly Medina")
        .with("duration", "1 Hora Pedagógica")
        .with("unit", "2")
        .with("session.number", "6")
        .with("session.title", "[Espacio para ingresar el título de la sesión]")
        .with("moments.title", "III. MOMENTOS DE LA SESIÓN 6")
        .with(
            "start.1.process",
            "Motivación, recojo de saberes previos y conflicto cognitivo.",
        )
        .with(
            "start.1.activities",
            "Saludo y oración. Se presenta la situación significativa. \
             Se recogen los saberes previos con una lluvia de ideas.",
        )
        .with("start.1.resources", "Voz, Pizarra")
        .with("start.1.time", "10'")
        .with("start.2.process", "Propósito y organización.")
        .with(
            "start.2.activities",
            "Se presenta el título de la sesión y los propósitos de aprendizaje. \
             Se establecen los acuerdos de convivencia.",
        )
        .with("start.2.resources", "Voz")
        .with("start.2.time", "5'")
        .with(
            "development.1.process",
            "Gestión y acompañamiento del desarrollo de las competencias.",
        )
        .with(
            "development.1.activities",
            "El docente modela la actividad principal. Los estudiantes aplican lo \
             aprendido en un proyecto guiado, resolviendo dudas con el docente.",
        )
        .with("development.1.resources", "PC, Proyector, Software")
        .with("development.1.time", "60'")
        .with("development.2.process", "Trabajo colaborativo.")
        .with(
            "development.2.activities",
            "Los estudiantes se organizan en equipos para desarrollar una parte del \
             proyecto, fomentando la colaboración y el intercambio de ideas.",
        )
        .with("development.2.resources", "Guía de trabajo")
        .with("development.2.time", "")
        .with("closing.1.process", "Evaluación.")
        .with(
            "closing.1.activities",
            "Metacognición: ¿Qué aprendimos hoy? ¿Cómo lo aprendimos? ¿Para qué nos sirve? \
             Se revisa el cumplimiento de los propósitos y acuerdos.",
        )
        .with("closing.1.resources", "Voz, Cuestionario")
        .with("closing.1.time", "15'")
}
