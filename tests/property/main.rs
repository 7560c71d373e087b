mod mass_propagation;
