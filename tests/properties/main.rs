mod invariant_tests;
