// Data source defaults
pub const DEFAULT_ENDPOINT: &str = "www.datos.gov.co";
pub const DEFAULT_DATASET_ID: &str = "xvdy-vvsk";
pub const DEFAULT_TOKEN_ENV: &str = "SOCRATA_APP_TOKEN";
pub const APP_TOKEN_HEADER: &str = "X-App-Token";
pub const DATASET_ID_PATTERN: &str = r"^[a-z0-9]{4}-[a-z0-9]{4}$";

// Output defaults
pub const DEFAULT_OUTPUT_PATH: &str = "data/secop/contracts.parquet";
pub const DEFAULT_OUTPUT_FORMAT: &str = "parquet";

// Raw column names, as returned by the query
pub const COL_UID: &str = "uid";
pub const COL_ENTITY_NAME: &str = "nombre_de_la_entidad";
pub const COL_DEPARTMENT: &str = "departamento_entidad";
pub const COL_ENTITY_ORDER: &str = "orden_entidad";
pub const COL_PROCESS_TYPE: &str = "tipo_de_proceso";
pub const COL_OBJECT: &str = "objeto_a_contratar";
pub const COL_OBJECT_DETAIL: &str = "detalle_objeto";
pub const COL_PROCESS_AMOUNT: &str = "cuantia_proceso";
pub const COL_CONTRACT_AMOUNT: &str = "cuantia_contrato";
pub const COL_ADDITIONS_AMOUNT: &str = "valor_total_de_adiciones";
pub const COL_AMOUNT_WITH_ADDITIONS: &str = "valor_contrato_con_adiciones";
pub const COL_SIGNATURE_YEAR: &str = "anno_firma";
pub const COL_SIGNATURE_DATE: &str = "fecha_fima";
pub const COL_START_DATE: &str = "fecha_ini_ejec_contrato";
pub const COL_PLANNED_DURATION: &str = "plazo_de_ejec_del_contrato";
pub const COL_DURATION_UNIT: &str = "rango_de_ejec_del_contrato";
pub const COL_ADDED_DAYS: &str = "tiempo_adiciones_en_dias";
pub const COL_ADDED_MONTHS: &str = "tiempo_adiciones_en_meses";
pub const COL_END_DATE: &str = "fecha_fin_ejec_contrato";

/// Projection of the extraction query: `(source expression, output column)`.
pub const SELECT_FIELDS: &[(&str, &str)] = &[
    ("uid", COL_UID),
    ("nombre_de_la_entidad", COL_ENTITY_NAME),
    ("departamento_entidad", COL_DEPARTMENT),
    ("orden_entidad", COL_ENTITY_ORDER),
    ("tipo_de_proceso", COL_PROCESS_TYPE),
    ("objeto_a_contratar", COL_OBJECT),
    ("UPPER(detalle_del_objeto_a_contratar)", COL_OBJECT_DETAIL),
    ("cuantia_proceso", COL_PROCESS_AMOUNT),
    ("cuantia_contrato", COL_CONTRACT_AMOUNT),
    ("valor_total_de_adiciones", COL_ADDITIONS_AMOUNT),
    ("valor_contrato_con_adiciones", COL_AMOUNT_WITH_ADDITIONS),
    ("anno_firma_del_contrato", COL_SIGNATURE_YEAR),
    ("fecha_de_firma_del_contrato", COL_SIGNATURE_DATE),
    ("fecha_ini_ejec_contrato", COL_START_DATE),
    ("plazo_de_ejec_del_contrato", COL_PLANNED_DURATION),
    ("rango_de_ejec_del_contrato", COL_DURATION_UNIT),
    ("tiempo_adiciones_en_dias", COL_ADDED_DAYS),
    ("tiempo_adiciones_en_meses", COL_ADDED_MONTHS),
    ("fecha_fin_ejec_contrato", COL_END_DATE),
];

// Query predicate
pub const COMMODITY_FAMILY: &str = "9511";
pub const PROCESS_STATUS: &str = "Liquidado";
pub const EXCLUDED_YEARS: &[&str] = &["2010", "2011", "2012", "2013", "2021", "2022"];
pub const MIN_AMOUNT: u64 = 20_000_000;
pub const EXCLUDED_REGIME: &str = "Régimen Especial";
pub const PROCESS_TYPES: &[&str] = &["Licitación obra pública", "Licitación Pública"];
pub const ROW_LIMIT: usize = 1000;

/// Object-detail substrings that rule a contract out of the dataset.
/// Matched against the upper-cased detail text on the service side.
pub const EXCLUDED_DETAIL_TERMS: &[&str] = &[
    "MEZCLA ASFÁLTICA",
    "REDUCTORES DE VELOCIDAD",
    "MUROS DE CONTENCIÓN",
    "DEMOLICIÓN",
    "RESTAURACIÓN ESTACIÓN FÉRREA",
    "CONSTRUCCIÓN DE REDUCTORES DE VELOCIDAD",
    "BARANDAS",
    "SEÑALIZACIÓN",
    "REHABILITACIÓN Y CONSERVACIÓN PUENTE",
    "MANTENIMIENTO TÚNEL",
    "ALCANTARILLA",
    "MANO DE OBRA",
    "BOX CULVERT",
    "PUENTES COLGANTES",
    "CASCO URBANO",
    "VÍAS URBANAS",
    "EJERCITO",
    "SEMAFORIZACIÓN",
    "DEMOLICIONES",
    "MURO",
    "CICLOVÍAS",
    "CICLORUTA",
    "RESIDUOS SÓLIDOS",
    "DESMONTE Y LIMPIEZA",
    "AULAS",
];

// Renamed columns
pub const ESTIMATED_COST: &str = "ESTIMATED_COST";
pub const ORIGINAL_DEADLINE: &str = "ORIGINAL_DEADLINE";
pub const CONTRACT_VALUE: &str = "CONTRACT_VALUE";
pub const FINAL_COST: &str = "FINAL_COST";
pub const ADDITIONAL_COST: &str = "ADDITIONAL_COST";
pub const YEAR: &str = "YEAR";
pub const MUNICIPALITY_TYPE: &str = "MUNICIPALITY_TYPE";
pub const DEPARTMENT: &str = "DEPARTMENT";
pub const PROCESS_TYPE: &str = "PROCESS_TYPE";
pub const CONTRACT_OBJECT: &str = "CONTRACT_OBJECT";
pub const OBJECT_DETAIL: &str = "OBJETC_DETAIL";

// Derived columns
pub const ADDITIONAL_TIME: &str = "ADDITIONAL_TIME";
pub const FINAL_DEADLINE: &str = "FINAL_DEADLINE";
pub const PROJECT_INTENSITY: &str = "PROJECT_INTENSITY";
pub const AWARD_GROWTH: &str = "AWARD_GROWTH";
pub const COST_DEVIATION: &str = "COST_DEVIATION";
pub const TIME_DEVIATION: &str = "TIME_DEVIATION";
pub const OWNER: &str = "OWNER";
pub const REGION: &str = "REGION";

/// Source → target column names handed to downstream consumers.
/// `municipio_entidad` is not selected by the query and is skipped when absent.
pub const COLUMN_RENAMES: &[(&str, &str)] = &[
    (COL_PROCESS_AMOUNT, ESTIMATED_COST),
    (COL_PLANNED_DURATION, ORIGINAL_DEADLINE),
    (COL_CONTRACT_AMOUNT, CONTRACT_VALUE),
    (COL_AMOUNT_WITH_ADDITIONS, FINAL_COST),
    (COL_ADDITIONS_AMOUNT, ADDITIONAL_COST),
    (COL_SIGNATURE_YEAR, YEAR),
    (COL_ENTITY_ORDER, MUNICIPALITY_TYPE),
    (COL_DEPARTMENT, DEPARTMENT),
    (COL_SIGNATURE_DATE, "CONTRACT_DATE"),
    (COL_START_DATE, "START_DATE"),
    (COL_END_DATE, "END_DATE"),
    (COL_ENTITY_NAME, "ENTITY_NAME"),
    ("municipio_entidad", "MUNICIPALITY"),
    (COL_PROCESS_TYPE, PROCESS_TYPE),
    (COL_OBJECT, CONTRACT_OBJECT),
    (COL_OBJECT_DETAIL, OBJECT_DETAIL),
    (COL_UID, "CONTRACT_ID"),
];

pub const MONETARY_RAW_COLUMNS: &[&str] = &[
    COL_PROCESS_AMOUNT,
    COL_CONTRACT_AMOUNT,
    COL_ADDITIONS_AMOUNT,
    COL_AMOUNT_WITH_ADDITIONS,
];
pub const INTEGER_RAW_COLUMNS: &[&str] = &[
    COL_SIGNATURE_YEAR,
    COL_PLANNED_DURATION,
    COL_ADDED_DAYS,
    COL_ADDED_MONTHS,
];
pub const DATE_RAW_COLUMNS: &[&str] = &[COL_SIGNATURE_DATE, COL_START_DATE, COL_END_DATE];

pub const MONETARY_COLUMNS: &[&str] = &[ESTIMATED_COST, CONTRACT_VALUE, ADDITIONAL_COST, FINAL_COST];
pub const UPPERCASE_COLUMNS: &[&str] = &[DEPARTMENT, PROCESS_TYPE, CONTRACT_OBJECT, OBJECT_DETAIL];

/// Monthly legal minimum wage (COP) by signature year.
pub const MINIMUM_WAGE: &[(i32, f64)] = &[
    (2014, 616_000.0),
    (2015, 644_350.0),
    (2016, 689_455.0),
    (2017, 737_717.0),
    (2018, 781_242.0),
    (2019, 828_116.0),
    (2020, 877_803.0),
];

pub const MONTHS_UNIT: &str = "M";
pub const DAYS_PER_MONTH: i64 = 30;

/// Entity order domain shared by the owner and municipality-type recodings.
pub const ENTITY_ORDERS: [&str; 10] = [
    "TERRITORIAL DISTRITAL MUNICIPAL NIVEL 1",
    "TERRITORIAL DISTRITAL MUNICIPAL NIVEL 2",
    "TERRITORIAL DISTRITAL MUNICIPAL NIVEL 3",
    "TERRITORIAL DISTRITAL MUNICIPAL NIVEL 4",
    "TERRITORIAL DISTRITAL MUNICIPAL NIVEL 5",
    "TERRITORIAL DISTRITAL MUNICIPAL NIVEL 6",
    "TERRITORIAL DEPARTAMENTAL CENTRALIZADO",
    "TERRITORIAL DEPARTAMENTAL DESCENTRALIZADO",
    "DISTRITO CAPITAL",
    "NACIONAL CENTRALIZADO",
];

pub const MUNICIPALITY_TYPES: [&str; 10] = [
    "TYPE_1", "TYPE_2", "TYPE_3", "TYPE_4", "TYPE_5", "TYPE_6", "OTHER", "OTHER", "OTHER", "OTHER",
];

pub const OWNERS: [&str; 10] = [
    "MUNICIPALITY",
    "MUNICIPALITY",
    "MUNICIPALITY",
    "MUNICIPALITY",
    "MUNICIPALITY",
    "MUNICIPALITY",
    "DEPARTMENT_GOVERNMENT",
    "DEPARTMENT_GOVERNMENT",
    "OTHER",
    "OTHER",
];

// Region membership, by department name as published
pub const AMAZONIA: &[&str] = &["Amazonas", "Caquetá", "Putumayo", "Guainía", "Guaviare", "Vaupés"];
pub const ORINOQUIA: &[&str] = &["Meta", "Arauca", "Casanare", "Vichada"];
pub const ANDINA: &[&str] = &[
    "Antioquia",
    "Boyacá",
    "Caldas",
    "Cundinamarca",
    "Huila",
    "Norte De Santander",
    "Quindío",
    "Risaralda",
    "Santander",
    "Tolima",
    "Bogotá D.C.",
];
pub const CARIBE: &[&str] = &[
    "Atlántico",
    "Bolívar",
    "Cesar",
    "Córdoba",
    "La Guajira",
    "Magdalena",
    "Sucre",
    "San Andrés, Providencia y Santa Catalina",
];
pub const PACIFICA: &[&str] = &["Cauca", "Valle del Cauca", "Chocó", "Nariño"];
