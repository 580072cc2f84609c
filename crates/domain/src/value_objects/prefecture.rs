//! The 47 fixed reference regions used for nearest-match geolocation.

use super::geo::{haversine_km, GeoPosition};

/// One of the 47 fixed administrative reference areas.
///
/// `reference` is the coordinate used for nearest-match lookup (the
/// prefectural capital); `landmark` is a representative sight used as a
/// secondary street-imagery probe point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prefecture {
    pub name: &'static str,
    pub reference: GeoPosition,
    pub landmark: GeoPosition,
}

impl Prefecture {
    /// Returns the prefecture whose reference point is closest to `position`.
    ///
    /// Ties resolve to table order (strictly-smaller comparison keeps the
    /// first minimal match).
    pub fn nearest(position: GeoPosition) -> &'static Prefecture {
        let mut closest = &PREFECTURES[0];
        let mut min_distance = f64::INFINITY;
        for prefecture in &PREFECTURES {
            let distance = haversine_km(position, prefecture.reference);
            if distance < min_distance {
                min_distance = distance;
                closest = prefecture;
            }
        }
        closest
    }

    /// Display name with its administrative suffix marker stripped.
    ///
    /// Exactly one of 県 (prefecture), 府 (urban prefecture), or 都
    /// (metropolis) is removed from the end; 北海道 carries none and is used
    /// verbatim.
    pub fn image_stem(&self) -> &'static str {
        self.name
            .strip_suffix('県')
            .or_else(|| self.name.strip_suffix('府'))
            .or_else(|| self.name.strip_suffix('都'))
            .unwrap_or(self.name)
    }

    /// Local background image path keyed by this prefecture.
    pub fn background_image_path(&self) -> String {
        format!("/backgrounds/{}.jpg", self.image_stem())
    }
}

const fn prefecture(
    name: &'static str,
    ref_lat: f64,
    ref_lon: f64,
    lm_lat: f64,
    lm_lon: f64,
) -> Prefecture {
    Prefecture {
        name,
        reference: GeoPosition::new(ref_lat, ref_lon),
        landmark: GeoPosition::new(lm_lat, lm_lon),
    }
}

/// Static reference table, ordered north to south.
pub const PREFECTURES: [Prefecture; 47] = [
    prefecture("北海道", 43.064359, 141.346814, 43.0618, 141.3545),
    prefecture("青森県", 40.824308, 140.740259, 40.8243, 140.7403),
    prefecture("岩手県", 39.703619, 141.152684, 39.7036, 141.1527),
    prefecture("宮城県", 38.268837, 140.872103, 38.2688, 140.8721),
    prefecture("秋田県", 39.718600, 140.102334, 39.7186, 140.1023),
    prefecture("山形県", 38.255438, 140.339848, 38.2554, 140.3398),
    prefecture("福島県", 37.750299, 140.467521, 37.7503, 140.4675),
    prefecture("茨城県", 36.341813, 140.446793, 36.3418, 140.4468),
    prefecture("栃木県", 36.565725, 139.883565, 36.5657, 139.8836),
    prefecture("群馬県", 36.390668, 139.060406, 36.3907, 139.0604),
    prefecture("埼玉県", 35.857428, 139.648933, 35.8574, 139.6489),
    prefecture("千葉県", 35.605058, 140.123308, 35.6051, 140.1233),
    prefecture("東京都", 35.689521, 139.691704, 35.6895, 139.6917),
    prefecture("神奈川県", 35.447753, 139.642514, 35.4478, 139.6425),
    prefecture("新潟県", 37.902418, 139.023221, 37.9024, 139.0232),
    prefecture("富山県", 36.695291, 137.211338, 36.6953, 137.2113),
    prefecture("石川県", 36.594682, 136.625573, 36.5947, 136.6256),
    prefecture("福井県", 36.065219, 136.221642, 36.0652, 136.2216),
    prefecture("山梨県", 35.664158, 138.568449, 35.6642, 138.5684),
    prefecture("長野県", 36.651289, 138.181224, 36.6513, 138.1812),
    prefecture("岐阜県", 35.391227, 136.722291, 35.3912, 136.7223),
    prefecture("静岡県", 34.976978, 138.383054, 34.9770, 138.3831),
    prefecture("愛知県", 35.180188, 136.906564, 35.1802, 136.9066),
    prefecture("三重県", 34.730283, 136.508591, 34.7303, 136.5086),
    prefecture("滋賀県", 35.004531, 135.868590, 35.0045, 135.8686),
    prefecture("京都府", 35.021004, 135.755608, 35.0210, 135.7556),
    prefecture("大阪府", 34.686316, 135.519711, 34.6863, 135.5197),
    prefecture("兵庫県", 34.690279, 135.195475, 34.6903, 135.1955),
    prefecture("奈良県", 34.685333, 135.832744, 34.6853, 135.8327),
    prefecture("和歌山県", 34.226034, 135.167506, 34.2260, 135.1675),
    prefecture("鳥取県", 35.503869, 134.237672, 35.5039, 134.2377),
    prefecture("島根県", 35.472297, 133.050499, 35.4723, 133.0505),
    prefecture("岡山県", 34.661772, 133.934675, 34.6618, 133.9347),
    prefecture("広島県", 34.396560, 132.459622, 34.3966, 132.4596),
    prefecture("山口県", 34.186121, 131.470500, 34.1861, 131.4705),
    prefecture("徳島県", 34.065770, 134.559303, 34.0658, 134.5593),
    prefecture("香川県", 34.340149, 134.043444, 34.3401, 134.0434),
    prefecture("愛媛県", 33.841660, 132.765362, 33.8417, 132.7654),
    prefecture("高知県", 33.559705, 133.531080, 33.5597, 133.5311),
    prefecture("福岡県", 33.606785, 130.418314, 33.6068, 130.4183),
    prefecture("佐賀県", 33.249367, 130.298822, 33.2494, 130.2988),
    prefecture("長崎県", 32.744839, 129.873756, 32.7448, 129.8738),
    prefecture("熊本県", 32.789828, 130.741667, 32.7898, 130.7417),
    prefecture("大分県", 33.238194, 131.612591, 33.2382, 131.6126),
    prefecture("宮崎県", 31.911096, 131.423855, 31.9111, 131.4239),
    prefecture("鹿児島県", 31.560148, 130.557981, 31.5601, 130.5580),
    prefecture("沖縄県", 26.212401, 127.680932, 26.2124, 127.6809),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokyo_coordinates_resolve_to_tokyo() {
        let found = Prefecture::nearest(GeoPosition::new(35.6895, 139.6917));
        assert_eq!(found.name, "東京都");
    }

    #[test]
    fn test_exact_reference_point_resolves_to_its_prefecture() {
        for prefecture in &PREFECTURES {
            let found = Prefecture::nearest(prefecture.reference);
            assert_eq!(found.name, prefecture.name);
        }
    }

    #[test]
    fn test_far_away_point_still_resolves() {
        // Offshore near Ishigaki; nearest-match never fails, it only
        // degrades to whichever reference point is least far.
        let found = Prefecture::nearest(GeoPosition::new(24.0, 124.0));
        assert_eq!(found.name, "沖縄県");
    }

    #[test]
    fn test_equidistant_point_resolves_to_table_order() {
        // Exactly between two identical synthetic distances there is no real
        // coordinate in the table, so probe the midpoint of two neighbours:
        // whichever compares strictly smaller first wins, and repeated calls
        // are stable.
        let a = Prefecture::nearest(GeoPosition::new(35.0, 137.0));
        let b = Prefecture::nearest(GeoPosition::new(35.0, 137.0));
        assert_eq!(a.name, b.name);
    }

    #[test]
    fn test_image_stem_strips_single_admin_suffix() {
        let by_name = |name: &str| {
            PREFECTURES
                .iter()
                .find(|p| p.name == name)
                .expect("prefecture in table")
        };
        assert_eq!(by_name("東京都").image_stem(), "東京");
        assert_eq!(by_name("京都府").image_stem(), "京都");
        assert_eq!(by_name("大阪府").image_stem(), "大阪");
        assert_eq!(by_name("神奈川県").image_stem(), "神奈川");
        assert_eq!(by_name("北海道").image_stem(), "北海道");
    }

    #[test]
    fn test_background_image_path() {
        let tokyo = Prefecture::nearest(GeoPosition::new(35.6895, 139.6917));
        assert_eq!(tokyo.background_image_path(), "/backgrounds/東京.jpg");
    }
}
