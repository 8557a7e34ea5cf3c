pub struct RegionCode {
}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    pub fn zz() -> &'static str {
        return "ZZ";
    }

    /// Returns the region code shared by non-geographical entities such as
    /// International Toll Free Service (+800).
    pub fn get_non_geo_entity() -> &'static str {
        return Self::un001();
    }

    pub fn un001() -> &'static str {
        return "001";
    }
}
