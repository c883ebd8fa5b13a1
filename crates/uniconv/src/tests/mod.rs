mod narrow_wide;
